/// A feasible non-empty subset of sites. Derived by the planner and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    /// Site names, in the order of the original site list.
    pub members: Vec<String>,

    /// Human-readable description ("all sites" / "all except ...").
    pub description: String,

    pub total_capacity: f64,

    pub total_fixed_cost: f64,
}

impl Combination {
    /// Comma-joined member names, the wire form expected by the solver.
    pub fn label(&self) -> String {
        self.members.join(", ")
    }

    pub fn contains(&self, site_name: &str) -> bool {
        self.members.iter().any(|m| m == site_name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_contains() {
        let combo = Combination {
            members: vec!["Cleveland".to_string(), "Harrisburg".to_string()],
            description: "all sites".to_string(),
            total_capacity: 140.0,
            total_fixed_cost: 60000.0,
        };

        assert_eq!(combo.label(), "Cleveland, Harrisburg");
        assert!(combo.contains("Cleveland"));
        assert!(!combo.contains("Chicago"));
        assert_eq!(combo.len(), 2);
    }
}
