//! Static scenario catalog.
//!
//! The catalog holds the two predefined data-flow descriptions the viewer
//! can display. Lookup is an exhaustive `match` over [`ScenarioKey`], so
//! adding or removing a scenario is a compile-time checked change. Each
//! scenario is built once and validated at construction; a dangling edge or
//! duplicate node id is an authoring bug and panics rather than surfacing a
//! runtime error.
//!
//! Query strings keep their leading and trailing newline; the fenced block
//! produced by the view layer preserves them as surrounding blank lines.

use std::sync::LazyLock;

use flujo_core::{
    element::{DiagramElement, Edge, Node, StyleClass},
    geometry::Point,
    scenario::{Scenario, ScenarioKey},
};

// The queries are transcribed byte-for-byte, trailing spaces included;
// concat! keeps each line's bytes explicit and safe from editor trimming.
const ETL_SQL_QUERY: &str = concat!(
    "\n",
    "-- Opción 1: Agrupación en SQL (ETL)\n",
    "SELECT \n",
    "    campo, patron, estructura, pozo,\n",
    "    AVG(presion) AS avg_presion,\n",
    "    SUM(produccion) AS prod_total\n",
    "FROM \n",
    "    tabla_pozos\n",
    "GROUP BY \n",
    "    campo, patron, estructura, pozo;\n",
);

const ELT_CDF_QUERY: &str = concat!(
    "\n",
    "-- Opción 2: Transformación en CDF (ELT)\n",
    "-- Paso 1: Cargar datos crudos a CDF\n",
    "-- Paso 2: Usar Cognite Functions para:\n",
    "SELECT \n",
    "    asset.externalId AS pozo_id,\n",
    "    ts.avg(presion) AS avg_presion\n",
    "FROM \n",
    "    timeseries ts\n",
    "JOIN \n",
    "    assets asset ON ts.asset_id = asset.id\n",
    "WHERE \n",
    "    asset.parent = 'Estructura_X';\n",
);

static ETL_SQL: LazyLock<Scenario> = LazyLock::new(|| {
    let elements: Vec<DiagramElement> = vec![
        Node::new(
            "etl",
            "SierraCol (DB - SQL)",
            "Base de datos SQL (Oracle, SQL Server) donde se almacenan los datos crudos de los pozos.",
            Point::new(50.0, 150.0),
        )
        .into(),
        Node::new(
            "grp",
            "Datos Agrupados (YAML)",
            "Querys en YAML que agrupan y preprocesan los datos antes de enviarlos a CDF.",
            Point::new(300.0, 150.0),
        )
        .into(),
        Node::new(
            "cdf",
            "CDF: Raw (Assets, Timeseries...)",
            "Datos preprocesados almacenados directamente en CDF como Timeseries y Assets.",
            Point::new(550.0, 150.0),
        )
        .into(),
        Node::new(
            "rel",
            "CDF: (Transformacion)",
            "Transformaciones aplicadas directamente dentro de CDF sobre los datos preprocesados.",
            Point::new(800.0, 150.0),
        )
        .into(),
        Node::new(
            "app",
            "Aplicativo (SDK, GraphQL)",
            "Aplicación que accede a los datos procesados mediante SDK o GraphQL API.",
            Point::new(1050.0, 150.0),
        )
        .into(),
        Node::new("title", "🔷 Flujo ETL - SQL", "", Point::new(475.0, 50.0))
            .with_style_class(StyleClass::Title)
            .into(),
        Edge::new("etl", "grp").into(),
        Edge::new("grp", "cdf").into(),
        Edge::new("cdf", "rel").into(),
        Edge::new("cdf", "app").into(),
    ];

    checked(Scenario::new("Flujo ETL - SQL", ETL_SQL_QUERY, elements))
});

static ELT_CDF: LazyLock<Scenario> = LazyLock::new(|| {
    let elements: Vec<DiagramElement> = vec![
        Node::new(
            "cd",
            "CDF: Raw (Assets, Timeseries...)",
            "Datos crudos de los pozos almacenados directamente en CDF como Timeseries y Assets.",
            Point::new(100.0, 350.0),
        )
        .into(),
        Node::new(
            "ass",
            "CDF: Relaciones",
            "Relaciones jerárquicas entre los Assets, gestionadas en el diccionario de CDF.",
            Point::new(350.0, 350.0),
        )
        .into(),
        Node::new(
            "rel",
            "CDF: (Transformacion)",
            "Transformaciones aplicadas directamente dentro de CDF sobre los datos relacionados.",
            Point::new(600.0, 350.0),
        )
        .into(),
        Node::new(
            "gql",
            "Aplicativo (SDK, GraphQL)",
            "Aplicación que consulta los datos procesados desde CDF usando el SDK o GraphQL.",
            Point::new(850.0, 350.0),
        )
        .into(),
        Node::new("title", "🟢 Flujo ELT - CDF", "", Point::new(475.0, 270.0))
            .with_style_class(StyleClass::Title)
            .into(),
        Edge::new("cd", "ass").into(),
        Edge::new("ass", "rel").into(),
        Edge::new("rel", "gql").into(),
    ];

    checked(Scenario::new("Flujo ELT - CDF", ELT_CDF_QUERY, elements))
});

fn checked(scenario: Scenario) -> Scenario {
    if let Err(err) = scenario.validate() {
        panic!("scenario `{}` has invalid data: {err}", scenario.title());
    }
    scenario
}

/// Look up the scenario for a key.
///
/// Pure read-only lookup with no side effects. Total over the closed key
/// set; there is no failure mode.
pub fn scenario(key: ScenarioKey) -> &'static Scenario {
    match key {
        ScenarioKey::EtlSql => &ETL_SQL,
        ScenarioKey::EltCdf => &ELT_CDF,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scenario_validates() {
        for key in ScenarioKey::ALL {
            assert_eq!(scenario(key).validate(), Ok(()));
        }
    }

    #[test]
    fn test_etl_element_set() {
        let etl = scenario(ScenarioKey::EtlSql);

        let node_ids: Vec<String> = etl
            .elements()
            .iter()
            .filter_map(DiagramElement::as_node)
            .map(|n| n.id().to_string())
            .collect();
        assert_eq!(node_ids, ["etl", "grp", "cdf", "rel", "app", "title"]);
        assert_eq!(etl.edges().count(), 4);
    }

    #[test]
    fn test_elt_element_set() {
        let elt = scenario(ScenarioKey::EltCdf);

        let node_ids: Vec<String> = elt
            .elements()
            .iter()
            .filter_map(DiagramElement::as_node)
            .map(|n| n.id().to_string())
            .collect();
        assert_eq!(node_ids, ["cd", "ass", "rel", "gql", "title"]);
        assert_eq!(elt.edges().count(), 3);
    }

    #[test]
    fn test_title_nodes_use_title_style() {
        for key in ScenarioKey::ALL {
            let title = scenario(key)
                .elements()
                .iter()
                .filter_map(DiagramElement::as_node)
                .find(|n| n.id() == "title")
                .expect("every scenario has a title pseudo-node");
            assert_eq!(title.style_class(), StyleClass::Title);
        }
    }

    #[test]
    fn test_queries_keep_surrounding_newlines() {
        for key in ScenarioKey::ALL {
            let query = scenario(key).query_text();
            assert!(query.starts_with('\n'));
            assert!(query.ends_with('\n'));
        }
    }
}
