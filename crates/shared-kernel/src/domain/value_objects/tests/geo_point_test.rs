use crate::domain::value_objects::{GeoPoint, ValueObject};

// Santiago et Valparaíso (Chili), ~93,5 km à vol d'oiseau
const SANTIAGO: (f64, f64) = (-33.0351516, -70.5955963);
const VALPARAISO: (f64, f64) = (-33.0348327, -71.5980458);

#[test]
fn test_geo_point_happy_path() {
    let point = GeoPoint::try_new(SANTIAGO.0, SANTIAGO.1).unwrap();
    assert_eq!(point.lat(), SANTIAGO.0);
    assert_eq!(point.lon(), SANTIAGO.1);
}

#[test]
fn test_geo_point_rejects_any_invalid_component() {
    // Latitude hors bornes
    assert!(GeoPoint::try_new(100.0, -70.5955963).is_err());
    // Longitude hors bornes
    assert!(GeoPoint::try_new(-33.0351516, -190.0).is_err());
    // Champs intervertis : 180 est une longitude valide mais pas une latitude
    assert!(GeoPoint::try_new(180.0, 90.0).is_err());
}

#[test]
fn test_geo_point_zero_zero_is_valid() {
    // (0, 0) est un vrai point du globe, pas une valeur "absente"
    assert!(GeoPoint::try_new(0.0, 0.0).is_ok());
}

#[test]
fn test_distance_between_known_cities() {
    let santiago = GeoPoint::try_new(SANTIAGO.0, SANTIAGO.1).unwrap();
    let valparaiso = GeoPoint::try_new(VALPARAISO.0, VALPARAISO.1).unwrap();

    let km = santiago.distance_to(&valparaiso);
    assert!((km - 93.45).abs() < 0.5, "Unexpected distance: {} km", km);
}

#[test]
fn test_distance_identity_is_exactly_zero() {
    let point = GeoPoint::try_new(50.0, 50.0).unwrap();
    assert_eq!(point.distance_to(&point), 0.0);
}

#[test]
fn test_distance_is_symmetric() {
    let a = GeoPoint::try_new(SANTIAGO.0, SANTIAGO.1).unwrap();
    let b = GeoPoint::try_new(48.8566, 2.3522).unwrap();

    // Bit à bit, pas seulement à epsilon près
    assert_eq!(a.distance_to(&b), b.distance_to(&a));
}

#[test]
fn test_distance_is_deterministic() {
    let a = GeoPoint::try_new(SANTIAGO.0, SANTIAGO.1).unwrap();
    let b = GeoPoint::try_new(VALPARAISO.0, VALPARAISO.1).unwrap();

    assert_eq!(a.distance_to(&b), a.distance_to(&b));
}

#[test]
fn test_distance_antipodal_points_do_not_produce_nan() {
    let north_pole = GeoPoint::try_new(90.0, 0.0).unwrap();
    let south_pole = GeoPoint::try_new(-90.0, 0.0).unwrap();

    let half_circumference = std::f64::consts::PI * 6371.0;
    let km = north_pole.distance_to(&south_pole);
    assert!(km.is_finite());
    assert!((km - half_circumference).abs() < 1e-6);

    // Quasi-antipodaux : le terme intermédiaire frôle 1.0
    let a = GeoPoint::try_new(0.0, 0.0).unwrap();
    let b = GeoPoint::try_new(0.0000001, 180.0).unwrap();
    let km = a.distance_to(&b);
    assert!(km.is_finite());
    assert!(km > 20_000.0 && km <= half_circumference + 1e-9);
}

#[test]
fn test_distance_grows_with_angular_separation() {
    let origin = GeoPoint::try_new(0.0, 0.0).unwrap();

    let mut previous = 0.0;
    for lon in [1.0, 10.0, 45.0, 90.0, 135.0, 180.0] {
        let km = origin.distance_to(&GeoPoint::try_new(0.0, lon).unwrap());
        assert!(km > previous, "Distance should grow: {} km at {}°", km, lon);
        previous = km;
    }
}

#[test]
fn test_geo_point_from_str() {
    let point: GeoPoint = "-33.0351516,-70.5955963".parse().unwrap();
    assert_eq!(point.lat(), -33.0351516);
    assert_eq!(point.lon(), -70.5955963);

    assert!("12.0".parse::<GeoPoint>().is_err());
    assert!("91.0,10.0".parse::<GeoPoint>().is_err());
}

#[test]
fn test_geo_point_from_raw_skips_validation() {
    let broken = GeoPoint::from_raw(123.0, 456.0);
    assert_eq!(broken.lat(), 123.0);
    assert!(broken.validate().is_err());
}
