use serde::{Deserialize, Serialize};

/// A savings group the signed-in user belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub member_count: Option<u32>,
}

impl SavingsGroup {
    /// Label for the group selector, e.g. "Umoja Women (24 members)".
    pub fn selector_label(&self) -> String {
        match self.member_count {
            Some(1) => format!("{} (1 member)", self.name),
            Some(count) => format!("{} ({} members)", self.name, count),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_payload() {
        let groups: Vec<SavingsGroup> = serde_json::from_str(
            r#"[{"id":"g1","name":"Umoja","memberCount":24},{"id":"g2","name":"Tumaini"}]"#,
        )
        .unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].member_count, Some(24));
        assert_eq!(groups[1].member_count, None);
    }

    #[test]
    fn selector_label() {
        let mut group = SavingsGroup {
            id: "g1".into(),
            name: "Umoja".into(),
            member_count: Some(24),
        };
        assert_eq!(group.selector_label(), "Umoja (24 members)");
        group.member_count = Some(1);
        assert_eq!(group.selector_label(), "Umoja (1 member)");
        group.member_count = None;
        assert_eq!(group.selector_label(), "Umoja");
    }
}
