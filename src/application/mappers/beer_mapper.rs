//! Mapping between [`BeerDto`] and [`Beer`].

use crate::api::dto::BeerDto;
use crate::application::mappers::date_mapper::{as_offset, as_utc};
use crate::domain::entities::Beer;

pub struct BeerMapper;

impl BeerMapper {
    pub fn dto_to_entity(dto: BeerDto) -> Beer {
        Beer::from(dto)
    }

    pub fn entity_to_dto(beer: Beer) -> BeerDto {
        BeerDto::from(beer)
    }

    pub fn to_entity(dto: Option<BeerDto>) -> Option<Beer> {
        dto.map(Self::dto_to_entity)
    }

    pub fn to_dto(beer: Option<Beer>) -> Option<BeerDto> {
        beer.map(Self::entity_to_dto)
    }
}

impl From<BeerDto> for Beer {
    fn from(dto: BeerDto) -> Self {
        Self {
            id: dto.id,
            beer_name: dto.beer_name,
            beer_style: dto.beer_style,
            upc: dto.upc,
            created_date: as_utc(dto.created_date),
            last_updated_date: as_utc(dto.last_updated_date),
        }
    }
}

impl From<Beer> for BeerDto {
    fn from(beer: Beer) -> Self {
        Self {
            id: beer.id,
            beer_name: beer.beer_name,
            beer_style: beer.beer_style,
            upc: beer.upc,
            created_date: as_offset(beer.created_date),
            last_updated_date: as_offset(beer.last_updated_date),
        }
    }
}
