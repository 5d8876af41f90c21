//! Fixed planned figures for depots whose plan is not entered by hand

use std::collections::HashMap;
use std::sync::LazyLock;

use depot_types::Depot;

/// Planned values forced for a depot. `None` leaves the entered value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepotOverride {
    pub planned_schedules: Option<u32>,
    pub planned_services: Option<u32>,
    pub planned_km: Option<u64>,
}

pub static DEPOT_OVERRIDES: LazyLock<HashMap<Depot, DepotOverride>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(
        Depot::Mahaboobnagar,
        DepotOverride {
            planned_schedules: Some(60),
            planned_services: Some(60),
            planned_km: Some(23739),
        },
    );

    m
});

pub fn depot_override(depot: Depot) -> Option<&'static DepotOverride> {
    DEPOT_OVERRIDES.get(&depot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mahaboobnagar_override() {
        let o = depot_override(Depot::Mahaboobnagar).unwrap();
        assert_eq!(o.planned_schedules, Some(60));
        assert_eq!(o.planned_services, Some(60));
        assert_eq!(o.planned_km, Some(23739));
    }

    #[test]
    fn test_other_depots_have_no_override() {
        for depot in Depot::ALL.iter().filter(|d| **d != Depot::Mahaboobnagar) {
            assert!(depot_override(*depot).is_none(), "{} should not be overridden", depot);
        }
    }
}
