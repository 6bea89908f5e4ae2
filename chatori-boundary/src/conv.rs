use super::*;
use chatori_entities as e;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid coordinates: {0},{1}")]
    Position(f64, f64),
    #[error("Invalid URL: {0}")]
    Url(String),
    #[error("Invalid opening hours: {0}")]
    OpeningHours(String),
}

fn parse_url(url: &str) -> Result<e::url::Url, ConversionError> {
    url.parse().map_err(|_| ConversionError::Url(url.into()))
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl TryFrom<Coordinate> for e::geo::MapPoint {
    type Error = ConversionError;
    fn try_from(from: Coordinate) -> Result<Self, Self::Error> {
        let Coordinate { lat, lng } = from;
        e::geo::MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or(ConversionError::Position(lat, lng))
    }
}

impl From<e::stall::Stall> for Stall {
    fn from(from: e::stall::Stall) -> Self {
        let e::stall::Stall {
            id,
            name,
            dish_type,
            location,
            description,
            opening_hours,
            phone,
            owner_name,
            images,
            rating,
            created,
        } = from;
        let (lat, lng) = location.pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            name,
            dish_type,
            area: location.area,
            lat,
            lng,
            description,
            opening_hours: opening_hours.map(Into::into),
            phone,
            owner_name,
            images: images.iter().map(ToString::to_string).collect(),
            rating: rating.value.into(),
            num_ratings: rating.count,
            created_by: created.by.map(Into::into),
            created_at: created.at.into_milliseconds(),
        }
    }
}

impl TryFrom<Stall> for e::stall::Stall {
    type Error = ConversionError;
    fn try_from(from: Stall) -> Result<Self, Self::Error> {
        let Stall {
            id,
            name,
            dish_type,
            area,
            lat,
            lng,
            description,
            opening_hours,
            phone,
            owner_name,
            images,
            rating,
            num_ratings,
            created_by,
            created_at,
        } = from;
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or(ConversionError::Position(lat, lng))?;
        let opening_hours = opening_hours
            .map(|oh| {
                oh.parse::<e::stall::OpeningHours>()
                    .map_err(|_| ConversionError::OpeningHours(oh))
            })
            .transpose()?;
        let images = images
            .iter()
            .map(|url| parse_url(url))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id: id.into(),
            name,
            dish_type,
            location: e::location::Location { pos, area },
            description,
            opening_hours,
            phone,
            owner_name,
            images,
            rating: e::rating::AvgRating {
                value: rating.into(),
                count: num_ratings,
            },
            created: e::activity::Activity {
                at: e::time::Timestamp::from_milliseconds(created_at),
                by: created_by.map(Into::into),
            },
        })
    }
}

impl From<e::review::Review> for Review {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            id,
            stall_id,
            user_id,
            rating,
            comment,
            created_at,
            author_name,
            author_image,
            stall_name,
        } = from;
        Self {
            id: id.into(),
            stall_id: stall_id.into(),
            user_id: user_id.into(),
            rating: rating.into(),
            comment,
            created_at: created_at.into_milliseconds(),
            author_name,
            author_image: author_image.map(|url| url.to_string()),
            stall_name,
        }
    }
}

impl TryFrom<Review> for e::review::Review {
    type Error = ConversionError;
    fn try_from(from: Review) -> Result<Self, Self::Error> {
        let Review {
            id,
            stall_id,
            user_id,
            rating,
            comment,
            created_at,
            author_name,
            author_image,
            stall_name,
        } = from;
        let author_image = author_image.as_deref().map(parse_url).transpose()?;
        Ok(Self {
            id: id.into(),
            stall_id: stall_id.into(),
            user_id: user_id.into(),
            rating: rating.into(),
            comment,
            created_at: e::time::Timestamp::from_milliseconds(created_at),
            author_name,
            author_image,
            stall_name,
        })
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            email,
            image,
            bio,
            phone,
            favorites,
        } = from;
        Self {
            id: id.into(),
            name,
            email: email.into_string(),
            image: image.map(|url| url.to_string()),
            bio,
            phone,
            favorites: Vec::from(favorites)
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl TryFrom<User> for e::user::User {
    type Error = ConversionError;
    fn try_from(from: User) -> Result<Self, Self::Error> {
        let User {
            id,
            name,
            email,
            image,
            bio,
            phone,
            favorites,
        } = from;
        let image = image.as_deref().map(parse_url).transpose()?;
        Ok(Self {
            id: id.into(),
            name,
            email: e::email::EmailAddress::new_unchecked(email),
            image,
            bio,
            phone,
            favorites: favorites
                .into_iter()
                .map(e::id::Id::from)
                .collect::<Vec<_>>()
                .into(),
        })
    }
}

impl From<e::dish::Dish> for Dish {
    fn from(from: e::dish::Dish) -> Self {
        let e::dish::Dish {
            id,
            name,
            tags,
            price,
            image,
        } = from;
        Self {
            id: id.into(),
            name,
            tags,
            price,
            image: image.map(|url| url.to_string()),
        }
    }
}

impl TryFrom<Dish> for e::dish::Dish {
    type Error = ConversionError;
    fn try_from(from: Dish) -> Result<Self, Self::Error> {
        let Dish {
            id,
            name,
            tags,
            price,
            image,
        } = from;
        let image = image.as_deref().map(parse_url).transpose()?;
        Ok(Self {
            id: id.into(),
            name,
            tags,
            price,
            image,
        })
    }
}
