use super::prelude::*;

/// Editable descriptive fields of a stall. The rating aggregate, the
/// image list, and the creation record are never touched by an edit.
#[derive(Debug, Clone, Default)]
pub struct UpdateStall {
    pub name: Option<String>,
    pub dish_type: Option<String>,
    pub area: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub description: Option<String>,
    pub opening_hours: Option<String>,
    pub phone: Option<String>,
    pub owner_name: Option<String>,
}

pub fn update_stall<R: StallRepo>(
    repo: &R,
    user_id: &Id,
    stall_id: &str,
    u: UpdateStall,
) -> Result<Stall> {
    let mut stall = repo.get_stall(stall_id)?;
    if !stall.is_created_by(user_id) {
        return Err(Error::Forbidden);
    }
    if let Some(name) = u.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(Error::Name);
        }
        stall.name = name;
    }
    if let Some(dish_type) = u.dish_type {
        stall.dish_type = dish_type;
    }
    if let Some(area) = u.area {
        stall.location.area = area;
    }
    if let (Some(lat), Some(lng)) = (u.lat, u.lng) {
        stall.location.pos =
            MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    }
    if let Some(description) = u.description {
        stall.description = description;
    }
    if let Some(opening_hours) = u.opening_hours {
        stall.opening_hours = Some(opening_hours.parse()?);
    }
    if let Some(phone) = u.phone {
        stall.phone = Some(phone);
    }
    if let Some(owner_name) = u.owner_name {
        stall.owner_name = Some(owner_name);
    }
    repo.update_stall(&stall)?;
    Ok(stall)
}

#[cfg(test)]
mod tests {

    use super::super::tests::MockDb;
    use super::*;
    use chatori_entities::builders::*;

    fn db_with_stall() -> MockDb {
        let db = MockDb::default();
        db.stalls.borrow_mut().push(
            Stall::build()
                .id("sharma")
                .name("Sharma Chaat")
                .dish_type("Chaat")
                .area("Karol Bagh")
                .rating(4.5, 10)
                .created_by("anmol")
                .finish(),
        );
        db
    }

    #[test]
    fn creator_may_edit_descriptive_fields() {
        let db = db_with_stall();
        let updated = update_stall(
            &db,
            &"anmol".into(),
            "sharma",
            UpdateStall {
                description: Some("Best chaat in town".into()),
                opening_hours: Some("10:00-22:00".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!("Best chaat in town", updated.description);
        // The aggregate survives edits untouched.
        assert_eq!(10, updated.rating.count);
        assert_eq!(updated, db.get_stall("sharma").unwrap());
    }

    #[test]
    fn other_users_are_rejected() {
        let db = db_with_stall();
        assert!(matches!(
            update_stall(&db, &"chotu".into(), "sharma", UpdateStall::default()),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn name_cannot_be_blanked_out() {
        let db = db_with_stall();
        assert!(matches!(
            update_stall(
                &db,
                &"anmol".into(),
                "sharma",
                UpdateStall {
                    name: Some("  ".into()),
                    ..Default::default()
                },
            ),
            Err(Error::Name)
        ));
    }
}
