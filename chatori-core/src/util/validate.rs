use crate::entities::*;

pub fn is_valid_email(email: &str) -> bool {
    fast_chemail::is_valid_email(email)
}

pub fn is_valid_position(pos: MapPoint) -> bool {
    pos.is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email() {
        assert!(is_valid_email("chotu@example.com"));
        assert!(!is_valid_email("chotu@"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn position() {
        assert!(is_valid_position(MapPoint::from_lat_lng_deg(28.65, 77.19)));
        assert!(is_valid_position(MapPoint::default()));
        assert_eq!(None, MapPoint::try_from_lat_lng_deg(91.0, 0.0));
    }
}
