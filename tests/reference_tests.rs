use biatrack::{
    Directory, Toll, TollQuery, TollStatus,
    reference::{tolls_from_csv, tolls_from_json, tolls_from_text},
};

fn tolls() -> Vec<Toll> {
    vec![
        Toll::new("gualanday", "Gualanday", "Tolima", 12_600.0),
        Toll::new("chinauta", "Chinauta", "Cundinamarca", 15_000.0),
        Toll::new("cerritos", "Cerritos II", "Risaralda", 11_300.0),
        Toll::new("tunel", "Túnel de la Línea", "Tolima", 0.0).with_status(TollStatus::Suspended),
        Toll::new("mediacanoa", "Mediacanoa", "Valle del Cauca", 13_200.0)
            .with_operator("Unión Vial Río Pamplonita"),
    ]
}

#[test]
fn builtin_contractors() {
    let directory = Directory::builtin();
    assert_eq!(directory.contractors.len(), 18);
    assert!(directory.tolls.is_empty());

    let sge = directory.contractor("sge-energia").unwrap();
    assert_eq!(sge.name.as_ref(), "SGE-ENERGIA");
    assert_eq!(sge.bases.len(), 6);
    assert_eq!(directory.origin_city("c3-myd", "monteria"), Some("Montería"));
    assert_eq!(directory.base("bia", "barranquilla-bia").unwrap().label.as_ref(), "Unidad Barranquilla");
}

#[test]
fn missing_lookups_are_none() {
    let directory = Directory::builtin();
    assert!(directory.contractor("acme").is_none());
    assert!(directory.base("bia", "pasto").is_none());
    assert!(directory.origin_city("acme", "pasto").is_none());
    assert!(directory.toll("chinauta").is_none());
}

#[test]
fn toll_lookup_and_index() {
    let directory = Directory::builtin().with_tolls(tolls());
    let toll = directory.toll("cerritos").unwrap();
    assert_eq!(toll.index, 2);
    assert_eq!(toll.department.as_ref(), "Risaralda");
}

#[test]
fn duplicate_toll_id_keeps_first_for_lookup() {
    let directory = Directory::new().with_tolls(vec![
        Toll::new("dup", "Primero", "Meta", 1_000.0),
        Toll::new("dup", "Segundo", "Meta", 2_000.0),
    ]);
    assert_eq!(directory.toll("dup").unwrap().name.as_ref(), "Primero");
    assert_eq!(directory.tolls.len(), 2);
}

#[test]
fn departments_sorted_and_unique() {
    let directory = Directory::new().with_tolls(tolls());
    assert_eq!(
        directory.departments(),
        ["Cundinamarca", "Risaralda", "Tolima", "Valle del Cauca"]
    );
}

#[test]
fn filter_by_name_ignores_case_and_accents() {
    let directory = Directory::new().with_tolls(tolls());
    let ids: Vec<&str> = directory
        .filter_tolls(&TollQuery::by_name("TUNEL"))
        .iter()
        .map(|t| t.id.as_ref())
        .collect();
    assert_eq!(ids, ["tunel"]);
}

#[test]
fn filter_by_department() {
    let directory = Directory::new().with_tolls(tolls());
    let ids: Vec<&str> = directory
        .filter_tolls(&TollQuery::default().in_department("Tolima"))
        .iter()
        .map(|t| t.id.as_ref())
        .collect();
    assert_eq!(ids, ["gualanday", "tunel"]);

    let ids: Vec<&str> = directory
        .filter_tolls(&TollQuery::by_name("gual").in_department("Tolima"))
        .iter()
        .map(|t| t.id.as_ref())
        .collect();
    assert_eq!(ids, ["gualanday"]);
}

#[test]
fn empty_query_matches_all() {
    let directory = Directory::new().with_tolls(tolls());
    assert_eq!(directory.filter_tolls(&TollQuery::default()).len(), 5);
}

#[test]
fn csv_loader() {
    let data = "\
id,name,department,operator,fare_cop,status
pe-1, Gualanday ,Tolima,,12600,ACTIVE
,Cajamarca,Tolima,INVIAS,0,removed
pe-3,Mediacanoa,Valle del Cauca,UVRP,,SUSPENDED
";
    let tolls = tolls_from_csv(data.as_bytes()).unwrap();
    assert_eq!(tolls.len(), 3);

    assert_eq!(tolls[0].id.as_ref(), "pe-1");
    assert_eq!(tolls[0].name.as_ref(), "Gualanday");
    assert_eq!(tolls[0].operator, None);
    assert_eq!(tolls[0].fare_cop, 12_600.0);

    assert_eq!(tolls[1].id.as_ref(), "toll-1");
    assert_eq!(tolls[1].operator.as_deref(), Some("INVIAS"));
    assert_eq!(tolls[1].status, TollStatus::Removed);

    assert_eq!(tolls[2].fare_cop, 0.0);
    assert_eq!(tolls[2].status, TollStatus::Suspended);
}

#[test]
fn csv_loader_rejects_bad_fare() {
    let data = "id,name,department,fare_cop\nx,Peaje,Meta,doce mil\n";
    assert!(tolls_from_csv(data.as_bytes()).is_err());
}

#[test]
fn json_loader_array_with_spanish_keys() {
    let data = r#"[
        {"id": "t1", "nombre": "Chinauta", "departamento": "Cundinamarca", "tarifa": 15000},
        {"name": "Pubenza", "department": "Cundinamarca", "fareCOP": 7500.5, "status": "active"}
    ]"#;
    let tolls = tolls_from_json(data.as_bytes()).unwrap();
    assert_eq!(tolls.len(), 2);
    assert_eq!(tolls[0].name.as_ref(), "Chinauta");
    assert_eq!(tolls[0].fare_cop, 15_000.0);
    assert_eq!(tolls[1].id.as_ref(), "toll-1");
    assert_eq!(tolls[1].fare_cop, 7_500.5);
    assert_eq!(tolls[1].status, TollStatus::Active);
}

#[test]
fn json_loader_wrapped() {
    let data = r#"{"tolls": [{"id": "t1", "name": "Flandes", "department": "Tolima", "fare_cop": 9800, "status": "UNKNOWN"}]}"#;
    let tolls = tolls_from_json(data.as_bytes()).unwrap();
    assert_eq!(tolls.len(), 1);
    assert_eq!(tolls[0].status, TollStatus::Active);
}

#[test]
fn json_loader_rejects_garbage() {
    assert!(tolls_from_json("{\"peajes\": 3}".as_bytes()).is_err());
}

#[test]
fn text_loader() {
    let data = "\
# Peajes Tolima
Peaje Gualanday
Departamento: Tolima
Operador: Autopista Bogotá-Girardot
Tarifa: $ 12.600
Estado: Activo

Peaje Cajamarca
Depto: Tolima
Tarifa: 9.800
Estado: Desmontado

Peaje Chicoral
Departamento: Tolima
Tarifa: 8.200
Estado: Sin cobro temporal
15.000
";
    let tolls = tolls_from_text(data);
    assert_eq!(tolls.len(), 3);

    assert_eq!(tolls[0].name.as_ref(), "Peaje Gualanday");
    assert_eq!(tolls[0].department.as_ref(), "Tolima");
    assert_eq!(tolls[0].operator.as_deref(), Some("Autopista Bogotá-Girardot"));
    assert_eq!(tolls[0].fare_cop, 12_600.0);
    assert_eq!(tolls[0].status, TollStatus::Active);

    assert_eq!(tolls[1].status, TollStatus::Removed);
    assert_eq!(tolls[1].fare_cop, 0.0);

    assert_eq!(tolls[2].id.as_ref(), "toll-2");
    assert_eq!(tolls[2].status, TollStatus::Suspended);
    assert_eq!(tolls[2].fare_cop, 0.0);
}

#[test]
fn text_loader_ignores_orphan_keys() {
    let tolls = tolls_from_text("Tarifa: 5.000\nPeaje Sola\n");
    assert_eq!(tolls.len(), 1);
    assert_eq!(tolls[0].fare_cop, 0.0);
}
