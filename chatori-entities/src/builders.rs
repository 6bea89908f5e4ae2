pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{review_builder::*, stall_builder::*, user_builder::*};

pub mod stall_builder {

    use super::*;
    use crate::{activity::*, geo::*, id::*, location::*, rating::*, stall::*};

    #[derive(Debug)]
    pub struct StallBuild {
        stall: Stall,
    }

    impl StallBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.stall.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.stall.name = name.into();
            self
        }
        pub fn dish_type(mut self, dish_type: &str) -> Self {
            self.stall.dish_type = dish_type.into();
            self
        }
        pub fn area(mut self, area: &str) -> Self {
            self.stall.location.area = area.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.stall.location.pos = pos;
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.stall.description = desc.into();
            self
        }
        pub fn rating(mut self, value: f64, count: u64) -> Self {
            self.stall.rating = AvgRating {
                value: value.into(),
                count,
            };
            self
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.stall.created.by = Some(user_id.into());
            self
        }
        pub fn image(mut self, url: &str) -> Self {
            self.stall.images.push(url.parse().unwrap());
            self
        }
        pub fn finish(self) -> Stall {
            self.stall
        }
    }

    impl Builder for Stall {
        type Build = StallBuild;
        fn build() -> StallBuild {
            StallBuild {
                stall: Stall {
                    id: Id::new(),
                    name: "".into(),
                    dish_type: "".into(),
                    location: Location::default(),
                    description: "".into(),
                    opening_hours: None,
                    phone: None,
                    owner_name: None,
                    images: vec![],
                    rating: AvgRating::default(),
                    created: Activity::now(None),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn favorites(mut self, stall_ids: Vec<&str>) -> Self {
            self.user.favorites = stall_ids
                .into_iter()
                .map(Id::from)
                .collect::<Vec<_>>()
                .into();
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    name: "".into(),
                    email: EmailAddress::new_unchecked("".into()),
                    image: None,
                    bio: "".into(),
                    phone: "".into(),
                    favorites: Favorites::default(),
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, rating::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn stall_id(mut self, stall_id: &str) -> Self {
            self.review.stall_id = stall_id.into();
            self
        }
        pub fn user_id(mut self, user_id: &str) -> Self {
            self.review.user_id = user_id.into();
            self
        }
        pub fn rating(mut self, rating: f64) -> Self {
            self.review.rating = rating.into();
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.review.comment = comment.into();
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.review.created_at = at;
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    stall_id: Id::new(),
                    user_id: Id::new(),
                    rating: RatingValue::default(),
                    comment: "".into(),
                    created_at: Timestamp::now(),
                    author_name: "".into(),
                    author_image: None,
                    stall_name: "".into(),
                },
            }
        }
    }
}
