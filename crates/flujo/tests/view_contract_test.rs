//! Integration tests for the selection-and-render contract.
//!
//! These exercise the public API the way a hosting UI would: pick a
//! scenario, feed hover events, and check the three derived outputs.

use flujo::{
    catalog,
    element::DiagramElement,
    hover::{HoverEvent, NodeInfo},
    identifier::Id,
    scenario::ScenarioKey,
    view::{ViewState, fenced_sql},
};

#[test]
fn every_scenario_has_referential_integrity() {
    for key in ScenarioKey::ALL {
        let scenario = catalog::scenario(key);
        let node_ids: Vec<Id> = scenario
            .elements()
            .iter()
            .filter_map(DiagramElement::as_node)
            .map(|n| n.id())
            .collect();

        for edge in scenario.edges() {
            assert!(
                node_ids.contains(&edge.source()),
                "{key}: edge source {} not declared",
                edge.source()
            );
            assert!(
                node_ids.contains(&edge.target()),
                "{key}: edge target {} not declared",
                edge.target()
            );
        }
    }
}

#[test]
fn query_text_is_exact_fenced_wrapping() {
    for key in ScenarioKey::ALL {
        let output = ViewState::new(key).render();
        let expected = fenced_sql(catalog::scenario(key).query_text());
        assert_eq!(output.query_text(), expected, "byte-exact for {key}");
    }
}

#[test]
fn elements_pass_through_unchanged() {
    for key in ScenarioKey::ALL {
        let output = ViewState::new(key).render();
        assert_eq!(output.elements(), catalog::scenario(key).elements());
    }
}

#[test]
fn hover_render_is_repeatable() {
    let mut state = ViewState::new(ScenarioKey::EtlSql);
    state.hover(HoverEvent::Entered(NodeInfo::new("etl", "db tooltip")));

    let first = state.render();
    let second = state.render();
    assert_eq!(first.tooltip(), second.tooltip());
    assert_eq!(first, second);
}

#[test]
fn last_hover_event_wins() {
    let mut state = ViewState::new(ScenarioKey::EtlSql);
    state.hover(HoverEvent::Entered(NodeInfo::new("etl", "first")));
    state.hover(HoverEvent::Entered(NodeInfo::new("grp", "second")));

    let tooltip = state.render().tooltip().clone();
    assert!(tooltip.visible());
    assert_eq!(tooltip.text(), "second");
}

#[test]
fn leave_after_enter_clears_tooltip() {
    let mut state = ViewState::new(ScenarioKey::EtlSql);
    state.hover(HoverEvent::Entered(NodeInfo::new("etl", "first")));
    state.hover(HoverEvent::Left(Id::new("etl")));

    assert!(!state.render().tooltip().visible());
}

#[test]
fn end_to_end_etl_with_hover() {
    let expected_tooltip =
        "Base de datos SQL (Oracle, SQL Server) donde se almacenan los datos crudos de los pozos.";

    let mut state = ViewState::new(ScenarioKey::EtlSql);

    // The renderer hands the view controller the hovered node's own data
    let etl_node = catalog::scenario(ScenarioKey::EtlSql)
        .elements()
        .iter()
        .filter_map(DiagramElement::as_node)
        .find(|n| n.id() == "etl")
        .expect("ETL scenario declares node `etl`");
    assert_eq!(etl_node.tooltip(), expected_tooltip);

    state.hover(HoverEvent::Entered(NodeInfo::new(
        etl_node.id(),
        etl_node.tooltip(),
    )));

    let output = state.render();
    assert!(output.query_text().starts_with("```sql"));
    assert!(output.query_text().contains("GROUP BY"));
    assert_eq!(
        output.elements(),
        catalog::scenario(ScenarioKey::EtlSql).elements()
    );
    assert!(output.tooltip().visible());
    assert_eq!(output.tooltip().text(), expected_tooltip);
}

#[test]
fn end_to_end_elt_without_hover() {
    let output = ViewState::new(ScenarioKey::EltCdf).render();

    assert!(output.query_text().contains("JOIN"));
    assert!(output.query_text().contains("timeseries"));
    assert!(!output.tooltip().visible());
}
