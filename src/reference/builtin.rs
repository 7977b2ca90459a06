use crate::reference::{Base, Contractor};

type BaseRow = (&'static str, &'static str, &'static str);

const CONTRACTORS: &[(&str, &str, &[BaseRow])] = &[
    ("power-grid", "POWER GRID", &[("boyaca", "Base Boyacá", "Boyacá")]),
    ("sse", "S&SE", &[("manizales", "Base Manizales", "Manizales")]),
    ("gatria", "GATRIA", &[("bogota-gatria", "Base Bogotá", "Bogotá")]),
    (
        "bia",
        "BIA",
        &[
            ("bogota-bia", "Unidad Bogotá", "Bogotá"),
            ("barranquilla-bia", "Unidad Barranquilla", "Barranquilla"),
        ],
    ),
    (
        "dr-telemedida",
        "DR TELEMEDIDA",
        &[("medellin-drtele", "Base Medellín", "Medellín")],
    ),
    ("dtys-ingenieria", "DTYS INGENIERIA", &[("tunja", "Base Tunja", "Tunja")]),
    (
        "jem-electrintegral",
        "JEM Electrintegral S.A.S",
        &[("ibague", "Base Ibagué", "Ibagué")],
    ),
    ("iselec", "ISELEC", &[("medellin-iselec", "Base Medellín", "Medellín")]),
    ("mcr", "MCR", &[("bogota-mcr", "Base Bogotá", "Bogotá")]),
    (
        "diselec",
        "DISELEC",
        &[("piedecuesta", "Base Piedecuesta", "Piedecuesta")],
    ),
    ("rehobot", "REHOBOT", &[("cucuta", "Base Cúcuta", "Cúcuta")]),
    (
        "sge-energia",
        "SGE-ENERGIA",
        &[
            ("bucaramanga", "Base Bucaramanga", "Bucaramanga"),
            ("cali-sge", "Base Cali", "Cali"),
            ("medellin-sge", "Base Medellín", "Medellín"),
            ("villavicencio", "Base Villavicencio", "Villavicencio"),
            ("cartagena-sge", "Base Cartagena", "Cartagena"),
            ("pasto", "Base Pasto", "Pasto"),
        ],
    ),
    ("ar-ingenieria", "AR INGENIERIA", &[("neiva-ar", "Base Neiva", "Neiva")]),
    ("montajes-mte", "MONTAJES MTE", &[("neiva-mte", "Base Neiva", "Neiva")]),
    (
        "c3-myd",
        "C3-MYD ingeniería",
        &[
            ("barranquilla-c3", "Base Barranquilla", "Barranquilla"),
            ("valledupar", "Base Valledupar", "Valledupar"),
            ("cartagena-c3", "Base Cartagena", "Cartagena"),
            ("monteria", "Base Montería", "Montería"),
            ("bogota-c3", "Base Bogotá", "Bogotá"),
        ],
    ),
    (
        "isemec",
        "ISEMEC",
        &[
            ("bogota-isemec", "Base Bogotá", "Bogotá"),
            ("cali-isemec", "Base Cali", "Cali"),
        ],
    ),
    (
        "elecproyectos",
        "ELECPROYECTOS",
        &[("cali-elecproyectos", "Base Cali", "Cali")],
    ),
    (
        "gmas-services",
        "GMAS SERVICES",
        &[("barranquilla-gmas", "Base Barranquilla", "Barranquilla")],
    ),
];

/// The contractor directory shipped with the crate.
pub fn contractors() -> Vec<Contractor> {
    CONTRACTORS
        .iter()
        .map(|(id, name, bases)| {
            let bases = bases
                .iter()
                .map(|(id, label, city)| Base::new(id, label, city))
                .collect();
            Contractor::new(id, name, bases)
        })
        .collect()
}
