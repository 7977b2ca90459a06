use biatrack::{
    Config, Directory, FileStorage, FuelType, MemoryStorage, Settings, SettingsStore, Stamp,
    Storage, TripInput, TripRecord, TripStore,
    shared::{Cop, Distance, Duration},
    store::{SETTINGS_KEY, TRIPS_KEY},
    trip,
};
use chrono::{TimeZone, Utc};

fn record(id: &str) -> TripRecord {
    let input = TripInput {
        contractor_id: "sge-energia".into(),
        base_id: "pasto".into(),
        origin_city: "Pasto".into(),
        destination: "Ipiales".into(),
        fuel_type: FuelType::Gasolina,
        fuel_price_per_gallon: 15_250.0,
        km_per_gallon: 32.5,
        one_way_distance: Distance::from_kilometers(82.7),
        one_way_eta: Duration::from_minutes(95.0),
        selected_toll_ids: vec![],
    };
    let stamp = Stamp::new(id, Utc.with_ymd_and_hms(2025, 6, 2, 14, 5, 9).unwrap());
    trip::compute_with_stamp(&input, &Directory::builtin(), stamp)
}

const LEGACY_BLOB: &str = r#"[{
    "id": "0b5a6c9e-7f5e-4a55-9c1e-2f1e4d2b9a10",
    "createdAtISO": "2025-01-20T15:42:07.512Z",
    "contractorName": "POWER GRID",
    "baseLabel": "Base Boyacá",
    "originCity": "Boyacá",
    "destinationText": "Duitama",
    "fuelType": "ACPM",
    "fuelPricePerGallonCOP": 11200,
    "kmPerGallon": 40,
    "oneWayDistanceKm": 60,
    "roundTripDistanceKm": 120,
    "oneWayEtaMinutes": 70,
    "peakEtaMinutes": 245,
    "tollCountOneWay": 1,
    "tollCostOneWayCOP": 13500,
    "tollCountRoundTrip": 2,
    "tollCostRoundTripCOP": 27000,
    "fuelGallonsOneWay": 1.5,
    "fuelGallonsRoundTrip": 3,
    "fuelCostRoundTripCOP": 33600,
    "totalRoundTripCOP": 60600
}]"#;

#[test]
fn absent_slot_loads_empty() {
    let store = TripStore::new(MemoryStorage::new());
    assert!(store.load().is_empty());
}

#[test]
fn save_then_load() {
    let mut store = TripStore::new(MemoryStorage::new());
    let trips = vec![record("b"), record("a")];
    store.save(&trips).unwrap();
    assert_eq!(store.load(), trips);
}

#[test]
fn save_replaces_previous_list() {
    let mut store = TripStore::new(MemoryStorage::new());
    store.save(&[record("a"), record("b")]).unwrap();
    store.save(&[record("c")]).unwrap();
    let ids: Vec<String> = store.load().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, ["c"]);
}

#[test]
fn corrupt_json_loads_empty() {
    let mut storage = MemoryStorage::new();
    storage.set(TRIPS_KEY, "[{\"id\": \"broken\"").unwrap();
    let store = TripStore::new(storage);
    assert!(store.load().is_empty());
}

#[test]
fn wrong_shape_loads_empty() {
    let mut storage = MemoryStorage::new();
    storage.set(TRIPS_KEY, "{\"trips\": []}").unwrap();
    assert!(TripStore::new(storage).load().is_empty());
}

#[test]
fn legacy_blob_loads() {
    let mut storage = MemoryStorage::new();
    storage.set(TRIPS_KEY, LEGACY_BLOB).unwrap();
    let trips = TripStore::new(storage).load();
    assert_eq!(trips.len(), 1);
    let trip = &trips[0];
    assert_eq!(trip.destination, "Duitama");
    assert_eq!(trip.fuel_type, FuelType::Acpm);
    assert_eq!(trip.peak_eta, Duration::from_minutes(245.0));
    assert_eq!(trip.total_round_trip, Cop::new(60_600));
    assert_eq!(
        trip.created_at,
        Utc.with_ymd_and_hms(2025, 1, 20, 15, 42, 7).unwrap()
            + chrono::Duration::milliseconds(512)
    );
}

#[test]
fn json_uses_camel_case_keys() {
    let mut storage = MemoryStorage::new();
    TripStore::new(&mut storage).save(&[record("a")]).unwrap();
    let raw = storage.get(TRIPS_KEY).unwrap().unwrap();
    for key in [
        "\"createdAtISO\"",
        "\"destinationText\"",
        "\"fuelPricePerGallonCOP\"",
        "\"oneWayDistanceKm\"",
        "\"peakEtaMinutes\"",
        "\"totalRoundTripCOP\"",
        "\"GASOLINA\"",
    ] {
        assert!(raw.contains(key), "missing {key} in {raw}");
    }
}

#[test]
fn settings_live_in_their_own_slot() {
    let mut storage = MemoryStorage::new();
    TripStore::new(&mut storage).save(&[record("a")]).unwrap();
    let settings = Settings {
        maps_api_key: Some("abc123".into()),
    };
    SettingsStore::new(&mut storage).save(&settings).unwrap();

    assert_eq!(storage.len(), 2);
    assert_eq!(SettingsStore::new(&mut storage).load(), settings);
    assert_eq!(TripStore::new(&mut storage).load().len(), 1);
    assert!(storage.get(SETTINGS_KEY).unwrap().unwrap().contains("mapsApiKey"));
}

#[test]
fn corrupt_settings_load_default() {
    let mut storage = MemoryStorage::new();
    storage.set(SETTINGS_KEY, "not json").unwrap();
    assert_eq!(SettingsStore::new(storage).load(), Settings::default());
}

#[test]
fn custom_slot_name() {
    let mut storage = MemoryStorage::new();
    TripStore::new(&mut storage)
        .with_key("other_trips")
        .save(&[record("a")])
        .unwrap();
    assert!(TripStore::new(&mut storage).load().is_empty());
    assert_eq!(TripStore::new(&mut storage).with_key("other_trips").load().len(), 1);
}

#[test]
fn file_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new().with_data_dir(dir.path().join("state"));

    let mut store = TripStore::from_config(FileStorage::from_config(&config), &config);
    store.save(&[record("a"), record("b")]).unwrap();

    let reopened = TripStore::from_config(FileStorage::from_config(&config), &config);
    let ids: Vec<String> = reopened.load().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, ["a", "b"]);
    assert!(config.data_dir.join(format!("{TRIPS_KEY}.json")).exists());
}

#[test]
fn file_storage_missing_and_remove() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());
    assert_eq!(storage.get("nothing").unwrap(), None);
    storage.set("slot", "[]").unwrap();
    assert_eq!(storage.get("slot").unwrap().as_deref(), Some("[]"));
    storage.remove("slot").unwrap();
    assert_eq!(storage.get("slot").unwrap(), None);
    storage.remove("slot").unwrap();
}

#[test]
fn file_storage_corrupt_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{TRIPS_KEY}.json")), "\u{0}garbage").unwrap();
    let store = TripStore::new(FileStorage::new(dir.path()));
    assert!(store.load().is_empty());
}
