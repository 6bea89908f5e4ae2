use std::cmp::Ordering;
use std::str::FromStr;

use strum::EnumString;

use crate::entities::*;

/// Ordering applied to discovery results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SortMode {
    #[default]
    #[strum(serialize = "rating")]
    RatingDesc,
    #[strum(serialize = "name")]
    NameAsc,
    #[strum(serialize = "distance")]
    DistanceAsc,
}

impl SortMode {
    /// Lenient parsing for externally supplied sort parameters:
    /// anything unrecognized means the default order.
    pub fn from_param(param: &str) -> Self {
        Self::from_str(param).unwrap_or_default()
    }
}

/// Filter and ordering state of one discovery invocation.
///
/// Empty strings mean "no constraint". The radius only applies
/// together with an origin position.
#[derive(Debug, Default, Clone)]
pub struct DiscoveryQuery {
    pub text: String,
    pub dish_type: String,
    pub area: String,
    pub min_rating: f64,
    pub radius: Option<Distance>,
    pub sort: SortMode,
}

/// Maps the radius chip values of the UI onto a distance limit.
/// Non-positive values ("All") disable the limit.
pub fn radius_limit(km: f64) -> Option<Distance> {
    (km > 0.0).then(|| Distance::from_kilometers(km))
}

/// Great-circle distance in kilometers, for display next to results.
pub fn distance_km(from: MapPoint, to: MapPoint) -> f64 {
    MapPoint::distance(from, to).to_kilometers()
}

fn matches_text(stall: &Stall, needle: &str) -> bool {
    needle.is_empty()
        || stall.name.to_lowercase().contains(needle)
        || stall.dish_type.to_lowercase().contains(needle)
        || stall.area().to_lowercase().contains(needle)
}

fn matches_exact(value: &str, filter: &str) -> bool {
    filter.is_empty() || value.eq_ignore_ascii_case(filter)
}

fn within_radius(stall: &Stall, radius: Option<Distance>, origin: Option<MapPoint>) -> bool {
    match (radius, origin) {
        (Some(radius), Some(origin)) => {
            MapPoint::distance(origin, stall.location.pos) <= radius
        }
        // Without an origin the radius constraint cannot be evaluated
        // and is dropped instead of failing the call.
        _ => true,
    }
}

fn effective_sort(sort: SortMode, origin: Option<MapPoint>) -> SortMode {
    if sort == SortMode::DistanceAsc && origin.is_none() {
        SortMode::RatingDesc
    } else {
        sort
    }
}

/// Turns a snapshot of stall records into the ordered list a user sees.
///
/// Pure function of its inputs: filters are conjunctive, all sorts are
/// stable, and degraded inputs (missing origin, empty snapshot) degrade
/// the result instead of erroring.
///
/// Stalls resting at the unknown-position placeholder take part in
/// distance ordering and radius filtering like any other stall; see
/// `MapPoint::is_unknown`.
pub fn discover(
    stalls: Vec<Stall>,
    query: &DiscoveryQuery,
    origin: Option<MapPoint>,
) -> Vec<Stall> {
    let needle = query.text.trim().to_lowercase();
    let mut stalls: Vec<_> = stalls
        .into_iter()
        .filter(|stall| {
            matches_text(stall, &needle)
                && matches_exact(&stall.dish_type, &query.dish_type)
                && matches_exact(stall.area(), &query.area)
                && f64::from(stall.rating.value) >= query.min_rating
                && within_radius(stall, query.radius, origin)
        })
        .collect();

    match effective_sort(query.sort, origin) {
        SortMode::RatingDesc => {
            stalls.sort_by(|a, b| {
                b.rating
                    .value
                    .partial_cmp(&a.rating.value)
                    .unwrap_or(Ordering::Equal)
            });
        }
        SortMode::NameAsc => {
            stalls.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortMode::DistanceAsc => {
            let origin = origin.unwrap_or_default();
            stalls.sort_by(|a, b| {
                let da = MapPoint::distance(origin, a.location.pos);
                let db = MapPoint::distance(origin, b.location.pos);
                da.partial_cmp(&db).unwrap_or(Ordering::Equal)
            });
        }
    }

    stalls
}

#[cfg(test)]
mod tests {

    use super::*;
    use chatori_entities::builders::*;

    fn karol_bagh() -> MapPoint {
        MapPoint::from_lat_lng_deg(28.6514, 77.1907)
    }

    fn sample_stalls() -> Vec<Stall> {
        vec![
            Stall::build()
                .id("sharma")
                .name("Sharma Chaat")
                .dish_type("Chaat")
                .area("Karol Bagh")
                .pos(MapPoint::from_lat_lng_deg(28.6514, 77.1907))
                .rating(4.5, 10)
                .finish(),
            Stall::build()
                .id("momos")
                .name("Delhi Momos")
                .dish_type("Momos")
                .area("Saket")
                .pos(MapPoint::from_lat_lng_deg(28.5245, 77.2066))
                .rating(3.8, 4)
                .finish(),
            Stall::build()
                .id("rolls")
                .name("Roll Express")
                .dish_type("Rolls")
                .area("Saket")
                .pos(MapPoint::default())
                .rating(4.0, 2)
                .finish(),
        ]
    }

    fn ids(stalls: &[Stall]) -> Vec<&str> {
        stalls.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let result = discover(sample_stalls(), &DiscoveryQuery::default(), None);
        assert_eq!(3, result.len());
    }

    #[test]
    fn text_matches_name_dish_type_or_area_case_insensitively() {
        let query = DiscoveryQuery {
            text: "chaat".into(),
            ..Default::default()
        };
        assert_eq!(vec!["sharma"], ids(&discover(sample_stalls(), &query, None)));

        let query = DiscoveryQuery {
            text: "SAKET".into(),
            ..Default::default()
        };
        assert_eq!(2, discover(sample_stalls(), &query, None).len());

        let query = DiscoveryQuery {
            text: "momo".into(),
            ..Default::default()
        };
        assert_eq!(vec!["momos"], ids(&discover(sample_stalls(), &query, None)));

        let query = DiscoveryQuery {
            text: "biryani".into(),
            ..Default::default()
        };
        assert!(discover(sample_stalls(), &query, None).is_empty());
    }

    #[test]
    fn filters_are_conjunctive() {
        // "Saket" matches two stalls, but only one of them serves momos.
        let query = DiscoveryQuery {
            area: "saket".into(),
            dish_type: "Momos".into(),
            ..Default::default()
        };
        assert_eq!(vec!["momos"], ids(&discover(sample_stalls(), &query, None)));

        // A text match does not rescue a stall below the rating bound.
        let query = DiscoveryQuery {
            text: "momos".into(),
            min_rating: 4.0,
            ..Default::default()
        };
        assert!(discover(sample_stalls(), &query, None).is_empty());
    }

    #[test]
    fn min_rating_is_an_inclusive_lower_bound() {
        let query = DiscoveryQuery {
            min_rating: 4.0,
            ..Default::default()
        };
        let result = discover(sample_stalls(), &query, None);
        assert_eq!(vec!["sharma", "rolls"], ids(&result));
    }

    #[test]
    fn rating_sort_is_descending_and_default() {
        let result = discover(sample_stalls(), &DiscoveryQuery::default(), None);
        let ratings: Vec<f64> = result
            .iter()
            .map(|s| f64::from(s.rating.value))
            .collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(vec!["sharma", "rolls", "momos"], ids(&result));
    }

    #[test]
    fn rating_sort_preserves_insertion_order_of_ties() {
        let stalls = vec![
            Stall::build().id("a").name("A").rating(4.0, 1).finish(),
            Stall::build().id("b").name("B").rating(4.0, 7).finish(),
            Stall::build().id("c").name("C").rating(5.0, 1).finish(),
        ];
        let result = discover(stalls, &DiscoveryQuery::default(), None);
        assert_eq!(vec!["c", "a", "b"], ids(&result));
    }

    #[test]
    fn name_sort_is_case_insensitive_ascending() {
        let stalls = vec![
            Stall::build().id("b").name("banta soda").finish(),
            Stall::build().id("a").name("Aloo Tikki").finish(),
            Stall::build().id("z").name("Zarda House").finish(),
        ];
        let query = DiscoveryQuery {
            sort: SortMode::NameAsc,
            ..Default::default()
        };
        assert_eq!(vec!["a", "b", "z"], ids(&discover(stalls, &query, None)));
    }

    #[test]
    fn distance_sort_orders_by_proximity_to_the_origin() {
        let query = DiscoveryQuery {
            sort: SortMode::DistanceAsc,
            ..Default::default()
        };
        let result = discover(sample_stalls(), &query, Some(karol_bagh()));
        // The unranked placeholder position (0, 0) is far from Delhi and
        // deliberately not excluded, so it sorts last.
        assert_eq!(vec!["sharma", "momos", "rolls"], ids(&result));
    }

    #[test]
    fn distance_sort_without_origin_falls_back_to_rating() {
        let query = DiscoveryQuery {
            sort: SortMode::DistanceAsc,
            ..Default::default()
        };
        let result = discover(sample_stalls(), &query, None);
        assert_eq!(vec!["sharma", "rolls", "momos"], ids(&result));
    }

    #[test]
    fn radius_excludes_distant_stalls() {
        let query = DiscoveryQuery {
            radius: radius_limit(5.0),
            ..Default::default()
        };
        let result = discover(sample_stalls(), &query, Some(karol_bagh()));
        assert_eq!(vec!["sharma"], ids(&result));
    }

    #[test]
    fn non_positive_radius_means_no_limit() {
        assert_eq!(None, radius_limit(-1.0));
        assert_eq!(None, radius_limit(0.0));

        let unlimited = DiscoveryQuery {
            radius: radius_limit(-1.0),
            ..Default::default()
        };
        let unconstrained = DiscoveryQuery::default();
        assert_eq!(
            ids(&discover(sample_stalls(), &unlimited, Some(karol_bagh()))),
            ids(&discover(sample_stalls(), &unconstrained, Some(karol_bagh()))),
        );
    }

    #[test]
    fn radius_without_origin_is_dropped() {
        let query = DiscoveryQuery {
            radius: radius_limit(1.0),
            ..Default::default()
        };
        assert_eq!(3, discover(sample_stalls(), &query, None).len());
    }

    #[test]
    fn empty_snapshot_yields_empty_result() {
        let query = DiscoveryQuery {
            text: "chaat".into(),
            sort: SortMode::DistanceAsc,
            ..Default::default()
        };
        assert!(discover(vec![], &query, Some(karol_bagh())).is_empty());
    }

    #[test]
    fn sort_params_parse_leniently() {
        assert_eq!(SortMode::RatingDesc, SortMode::from_param("rating"));
        assert_eq!(SortMode::NameAsc, SortMode::from_param("NAME"));
        assert_eq!(SortMode::DistanceAsc, SortMode::from_param("distance"));
        assert_eq!(SortMode::RatingDesc, SortMode::from_param("bogus"));
        assert_eq!(SortMode::RatingDesc, SortMode::from_param(""));
    }

    #[test]
    fn two_stall_walkthrough() {
        let stalls = || {
            vec![
                Stall::build()
                    .id("sharma")
                    .name("Sharma Chaat")
                    .dish_type("Chaat")
                    .area("Karol Bagh")
                    .rating(4.5, 10)
                    .finish(),
                Stall::build()
                    .id("momos")
                    .name("Delhi Momos")
                    .dish_type("Momos")
                    .area("Saket")
                    .rating(3.8, 4)
                    .finish(),
            ]
        };

        let query = DiscoveryQuery {
            text: "chaat".into(),
            ..Default::default()
        };
        assert_eq!(vec!["sharma"], ids(&discover(stalls(), &query, None)));

        let query = DiscoveryQuery {
            min_rating: 4.0,
            ..Default::default()
        };
        assert_eq!(vec!["sharma"], ids(&discover(stalls(), &query, None)));

        let query = DiscoveryQuery {
            sort: SortMode::NameAsc,
            ..Default::default()
        };
        let names: Vec<String> = discover(stalls(), &query, None)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(vec!["Delhi Momos", "Sharma Chaat"], names);
    }
}
