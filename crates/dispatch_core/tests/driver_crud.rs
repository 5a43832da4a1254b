use dispatch_core::db::open_db_in_memory;
use dispatch_core::{
    Car, Driver, EntityKind, EntityRepository, RepoError, SqliteCarRepository,
    SqliteDriverRepository, ValidationError,
};
use rusqlite::Connection;

fn setup() -> Connection {
    open_db_in_memory().unwrap()
}

fn insert_car(conn: &Connection, plate: &str) -> Car {
    let cars = SqliteCarRepository::try_new(conn).unwrap();
    cars.save(&Car::new(plate, "Civic", "red")).unwrap()
}

fn driver_row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM drivers;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn insert_assigns_id_and_keeps_fields() {
    let conn = setup();
    let repo = SqliteDriverRepository::try_new(&conn).unwrap();

    let transient = Driver::new("Alice", true);
    let saved = repo.save(&transient).unwrap();

    assert!(saved.id.is_some());
    assert_eq!(saved.name, transient.name);
    assert_eq!(saved.available, transient.available);
    assert_eq!(saved.car, None);
    assert_eq!(transient.id, None, "input must not be mutated");
}

#[test]
fn driver_without_car_reads_back_with_absent_car() {
    let conn = setup();
    let repo = SqliteDriverRepository::try_new(&conn).unwrap();

    let saved = repo.save(&Driver::new("Bob", false)).unwrap();
    let loaded = repo.find_by_id(saved.id.unwrap()).unwrap().unwrap();

    assert_eq!(loaded, saved);
    assert!(loaded.car.is_none());

    let car_id: Option<i64> = conn
        .query_row(
            "SELECT car_id FROM drivers WHERE id = ?1;",
            [saved.id.unwrap()],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(car_id, None);
}

#[test]
fn driver_with_persisted_car_reads_back_the_same_car() {
    let conn = setup();
    let car = insert_car(&conn, "ABC123");
    let repo = SqliteDriverRepository::try_new(&conn).unwrap();

    let saved = repo
        .save(&Driver::new("Alice", true).with_car(car.clone()))
        .unwrap();
    let loaded = repo.find_by_id(saved.id.unwrap()).unwrap().unwrap();

    assert_eq!(loaded.car, Some(car));
    assert_eq!(loaded, saved);
}

#[test]
fn dispatch_scenario_insert_find_delete() {
    let conn = setup();
    let car = insert_car(&conn, "ABC123");
    assert_eq!(car.license_plate, "ABC123");
    assert_eq!(car.model, "Civic");
    assert_eq!(car.color, "red");
    let car_id = car.id.expect("saved car must have an id");

    let repo = SqliteDriverRepository::try_new(&conn).unwrap();
    let driver = repo
        .save(&Driver::new("Alice", true).with_car(car))
        .unwrap();
    let driver_id = driver.id.expect("saved driver must have an id");
    assert_eq!(driver.car_id(), Some(car_id));

    assert_eq!(repo.find_by_id(driver_id).unwrap(), Some(driver));

    repo.delete_by_id(driver_id).unwrap();
    assert_eq!(repo.find_by_id(driver_id).unwrap(), None);

    let err = repo.delete_by_id(driver_id).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound { kind: EntityKind::Driver, id } if id == driver_id
    ));
}

#[test]
fn update_overwrites_columns_and_returns_input() {
    let conn = setup();
    let car = insert_car(&conn, "XYZ789");
    let repo = SqliteDriverRepository::try_new(&conn).unwrap();

    let saved = repo.save(&Driver::new("Carol", false)).unwrap();

    let mut changed = saved.clone();
    changed.name = "Caroline".to_string();
    changed.available = true;
    changed.car = Some(car);
    let returned = repo.save(&changed).unwrap();
    assert_eq!(returned, changed);

    let loaded = repo.find_by_id(saved.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded, changed);

    let mut without_car = loaded.clone();
    without_car.car = None;
    repo.save(&without_car).unwrap();
    let reloaded = repo.find_by_id(saved.id.unwrap()).unwrap().unwrap();
    assert!(reloaded.car.is_none());
    assert_eq!(driver_row_count(&conn), 1);
}

#[test]
fn update_with_unknown_id_fails_without_mutation() {
    let conn = setup();
    let repo = SqliteDriverRepository::try_new(&conn).unwrap();
    repo.save(&Driver::new("Existing", true)).unwrap();

    let ghost = Driver {
        id: Some(999),
        name: "X".to_string(),
        available: false,
        car: None,
    };
    let err = repo.save(&ghost).unwrap_err();

    assert!(matches!(
        err,
        RepoError::NotFound { kind: EntityKind::Driver, id: 999 }
    ));
    assert_eq!(err.to_string(), "Driver with id 999 not found");
    assert_eq!(driver_row_count(&conn), 1);
    assert_eq!(repo.find_by_id(999).unwrap(), None);
}

#[test]
fn find_on_empty_table_returns_none_and_empty_list() {
    let conn = setup();
    let repo = SqliteDriverRepository::try_new(&conn).unwrap();

    assert_eq!(repo.find_by_id(1).unwrap(), None);
    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn find_all_orders_by_id_and_joins_cars() {
    let conn = setup();
    let car = insert_car(&conn, "JOIN01");
    let repo = SqliteDriverRepository::try_new(&conn).unwrap();

    let first = repo.save(&Driver::new("First", true)).unwrap();
    let second = repo
        .save(&Driver::new("Second", false).with_car(car.clone()))
        .unwrap();
    let third = repo.save(&Driver::new("Third", true)).unwrap();

    let all = repo.find_all().unwrap();
    assert_eq!(all, vec![first, second, third]);
    assert_eq!(all[1].car, Some(car));
}

#[test]
fn transient_car_is_rejected_before_any_write() {
    let conn = setup();
    let repo = SqliteDriverRepository::try_new(&conn).unwrap();

    let driver = Driver::new("Dave", true).with_car(Car::new("NEW001", "Golf", "blue"));
    let err = repo.save(&driver).unwrap_err();

    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::TransientCar)
    ));
    assert_eq!(driver_row_count(&conn), 0);
}

#[test]
fn unknown_id_is_reported_before_transient_car() {
    let conn = setup();
    let repo = SqliteDriverRepository::try_new(&conn).unwrap();

    let ghost = Driver {
        id: Some(999),
        name: "Dave".to_string(),
        available: true,
        car: Some(Car::new("NEW001", "Golf", "blue")),
    };
    let err = repo.save(&ghost).unwrap_err();

    assert!(matches!(
        err,
        RepoError::NotFound { kind: EntityKind::Driver, id: 999 }
    ));
    assert_eq!(driver_row_count(&conn), 0);
}

#[test]
fn blank_name_is_rejected() {
    let conn = setup();
    let repo = SqliteDriverRepository::try_new(&conn).unwrap();

    let err = repo.save(&Driver::new("   ", true)).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::BlankField {
            kind: EntityKind::Driver,
            field: "name"
        })
    ));
}

#[test]
fn unknown_car_reference_surfaces_as_storage_error() {
    let conn = setup();
    let repo = SqliteDriverRepository::try_new(&conn).unwrap();

    let mut phantom = Car::new("GHOST1", "Model", "grey");
    phantom.id = Some(4242);
    let err = repo
        .save(&Driver::new("Eve", true).with_car(phantom))
        .unwrap_err();

    assert!(matches!(err, RepoError::Db(_)));
    assert_eq!(driver_row_count(&conn), 0);
}

#[test]
fn null_text_columns_are_read_as_empty_strings() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE cars (
            id INTEGER PRIMARY KEY,
            license_plate TEXT,
            model TEXT,
            color TEXT
        );
        CREATE TABLE drivers (
            id INTEGER PRIMARY KEY,
            name TEXT,
            available INTEGER,
            car_id INTEGER
        );
        INSERT INTO cars (id, license_plate, model, color) VALUES (1, NULL, 'Civic', NULL);
        INSERT INTO drivers (id, name, available, car_id) VALUES (10, NULL, 1, 1);
        INSERT INTO drivers (id, name, available, car_id) VALUES (11, 'Solo', NULL, NULL);",
    )
    .unwrap();
    let repo = SqliteDriverRepository::try_new(&conn).unwrap();

    let with_car = repo.find_by_id(10).unwrap().unwrap();
    assert_eq!(with_car.name, "");
    let car = with_car.car.unwrap();
    assert_eq!(car.id, Some(1));
    assert_eq!(car.license_plate, "");
    assert_eq!(car.model, "Civic");
    assert_eq!(car.color, "");

    let solo = repo.find_by_id(11).unwrap().unwrap();
    assert!(!solo.available);
    assert!(solo.car.is_none());
}

#[test]
fn repository_rejects_connection_without_drivers_table() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteDriverRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("drivers"))
    ));
}

#[test]
fn repository_rejects_drivers_table_missing_car_id() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE drivers (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            available INTEGER NOT NULL
        );",
    )
    .unwrap();

    let result = SqliteDriverRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "drivers",
            column: "car_id"
        })
    ));
}
