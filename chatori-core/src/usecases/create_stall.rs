use super::prelude::*;

/// Parameters of a stall submission.
///
/// Latitude and longitude are optional because vendors may submit a
/// stall before its position has been captured.
#[derive(Debug, Clone, Default)]
pub struct NewStall {
    pub name: String,
    pub dish_type: String,
    pub area: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub description: Option<String>,
    pub opening_hours: Option<String>,
    pub phone: Option<String>,
    pub owner_name: Option<String>,
    pub image_urls: Vec<String>,
    pub created_by: Id,
}

fn label_or_unknown(label: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        UNKNOWN_LABEL.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn create_new_stall<R>(repo: &R, s: NewStall) -> Result<Stall>
where
    R: StallRepo + UserRepo,
{
    if repo.try_get_user(s.created_by.as_str())?.is_none() {
        return Err(Error::UserDoesNotExist);
    }
    let pos = match (s.lat, s.lng) {
        (Some(lat), Some(lng)) => {
            MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?
        }
        // No captured position yet: park the stall at the placeholder.
        (None, None) => MapPoint::default(),
        _ => return Err(Error::InvalidPosition),
    };
    let opening_hours = s
        .opening_hours
        .as_deref()
        .map(str::parse::<OpeningHours>)
        .transpose()?;
    let images = s
        .image_urls
        .iter()
        .map(|url| url.parse::<Url>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let stall = Stall {
        id: Id::new(),
        name: label_or_unknown(&s.name),
        dish_type: label_or_unknown(&s.dish_type),
        location: Location {
            pos,
            area: label_or_unknown(&s.area),
        },
        description: s.description.unwrap_or_default(),
        opening_hours,
        phone: s.phone,
        owner_name: s.owner_name,
        images,
        rating: AvgRating::default(),
        created: Activity::now(Some(s.created_by)),
    };
    log::debug!("Creating new stall: id = {}", stall.id);
    repo.create_stall(stall.clone())?;
    Ok(stall)
}

#[cfg(test)]
mod tests {

    use super::super::tests::MockDb;
    use super::*;
    use chatori_entities::builders::*;

    fn db_with_user(user_id: &str) -> MockDb {
        let db = MockDb::default();
        db.users
            .borrow_mut()
            .push(User::build().id(user_id).name("Anmol").finish());
        db
    }

    fn new_stall(created_by: &str) -> NewStall {
        NewStall {
            name: "Sharma Chaat".into(),
            dish_type: "Chaat".into(),
            area: "Karol Bagh".into(),
            lat: Some(28.6514),
            lng: Some(77.1907),
            created_by: created_by.into(),
            ..Default::default()
        }
    }

    #[test]
    fn create_a_stall() {
        let db = db_with_user("anmol");
        let stall = create_new_stall(&db, new_stall("anmol")).unwrap();
        assert_eq!(1, db.count_stalls().unwrap());
        assert_eq!("Sharma Chaat", stall.name);
        assert!(stall.is_created_by(&"anmol".into()));
        assert_eq!(0, stall.rating.count);
    }

    #[test]
    fn unknown_creator_is_rejected() {
        let db = MockDb::default();
        assert!(matches!(
            create_new_stall(&db, new_stall("ghost")),
            Err(Error::UserDoesNotExist)
        ));
    }

    #[test]
    fn blank_labels_become_the_unknown_placeholder() {
        let db = db_with_user("anmol");
        let stall = create_new_stall(
            &db,
            NewStall {
                name: " ".into(),
                dish_type: "".into(),
                area: "".into(),
                created_by: "anmol".into(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(UNKNOWN_LABEL, stall.name);
        assert_eq!(UNKNOWN_LABEL, stall.dish_type);
        assert_eq!(UNKNOWN_LABEL, stall.area());
        assert!(stall.location.pos.is_unknown());
    }

    #[test]
    fn out_of_range_position_is_rejected() {
        let db = db_with_user("anmol");
        let submission = NewStall {
            lat: Some(91.0),
            lng: Some(0.0),
            ..new_stall("anmol")
        };
        assert!(matches!(
            create_new_stall(&db, submission),
            Err(Error::InvalidPosition)
        ));

        let submission = NewStall {
            lat: Some(28.0),
            lng: None,
            ..new_stall("anmol")
        };
        assert!(matches!(
            create_new_stall(&db, submission),
            Err(Error::InvalidPosition)
        ));
    }

    #[test]
    fn malformed_image_url_is_rejected() {
        let db = db_with_user("anmol");
        let submission = NewStall {
            image_urls: vec!["not a url".into()],
            ..new_stall("anmol")
        };
        assert!(matches!(
            create_new_stall(&db, submission),
            Err(Error::Url)
        ));
    }
}
