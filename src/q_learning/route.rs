//! Greedy route extraction from a learned Q-table

use crate::{
    Error, Result, environment::Environment, identifiers::Location, q_learning::q_table::QTable,
};

/// Walk the table greedily from `start` until `end` is reached.
///
/// Each step moves to the highest-valued action of the current state (first
/// maximum wins). The returned route includes both endpoints; when
/// `start == end` it is just `[start]`.
///
/// # Errors
///
/// - [`Error::UnknownLocation`] if either label is not in the environment.
/// - [`Error::RouteBoundExceeded`] if the goal is not reached within
///   `max_steps` moves.
pub fn extract_route(
    table: &QTable,
    environment: &Environment,
    start: &str,
    end: &str,
    max_steps: usize,
) -> Result<Vec<Location>> {
    let mut current = environment.location_to_state(start)?;
    let goal = environment.location_to_state(end)?;

    let mut route = vec![environment.state_to_location(current)?.clone()];
    let mut steps = 0;
    while current != goal {
        if steps == max_steps {
            return Err(Error::RouteBoundExceeded {
                start: start.to_string(),
                end: end.to_string(),
                limit: max_steps,
            });
        }
        current = table.greedy_action(current);
        route.push(environment.state_to_location(current)?.clone());
        steps += 1;
    }

    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(route: &[Location]) -> Vec<&str> {
        route.iter().map(Location::as_str).collect()
    }

    #[test]
    fn same_start_and_end_is_single_element() {
        let env = Environment::grid();
        let route = extract_route(&QTable::new(), &env, "L4", "L4", 18).unwrap();
        assert_eq!(labels(&route), vec!["L4"]);
    }

    #[test]
    fn follows_highest_values() {
        let env = Environment::grid();
        let mut table = QTable::new();
        table.set(8, 7, 10.0);
        table.set(7, 4, 20.0);
        table.set(7, 6, 5.0);
        table.set(4, 1, 30.0);
        table.set(1, 0, 40.0);

        let route = extract_route(&table, &env, "L9", "L1", 18).unwrap();
        assert_eq!(labels(&route), vec!["L9", "L8", "L5", "L2", "L1"]);
    }

    #[test]
    fn untrained_table_hits_step_limit() {
        let env = Environment::grid();
        // All-zero rows send every state to L1, which never reaches L3.
        let err = extract_route(&QTable::new(), &env, "L9", "L3", 18).unwrap_err();
        assert!(matches!(err, Error::RouteBoundExceeded { limit: 18, .. }));
    }

    #[test]
    fn limit_counts_moves_not_nodes() {
        let env = Environment::grid();
        let mut table = QTable::new();
        table.set(8, 7, 1.0);
        table.set(7, 4, 1.0);

        assert!(extract_route(&table, &env, "L9", "L5", 2).is_ok());
        assert!(extract_route(&table, &env, "L9", "L5", 1).is_err());
    }

    #[test]
    fn unknown_labels_are_rejected() {
        let env = Environment::grid();
        let table = QTable::new();
        assert!(matches!(
            extract_route(&table, &env, "L0", "L1", 18),
            Err(Error::UnknownLocation { .. })
        ));
        assert!(matches!(
            extract_route(&table, &env, "L1", "nowhere", 18),
            Err(Error::UnknownLocation { .. })
        ));
    }
}
