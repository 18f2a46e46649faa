use serde::{Deserialize, Serialize};

/// The relationship rows JETNET reports for one or more aircraft, viewed as a graph
/// of companies, contacts, and the edges connecting them to airframes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RelationshipGraph {
    pub edges: Vec<RelationshipEdge>,
}

impl RelationshipGraph {
    pub fn new(edges: Vec<RelationshipEdge>) -> Self {
        Self { edges }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanyNode {
    pub company_id: Option<i64>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactNode {
    pub contact_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone_mobile: Option<String>,
    pub phone_office: Option<String>,
}

impl ContactNode {
    /// Identity key for deduplication: the contact id when JETNET supplies one,
    /// otherwise the normalized (lowercased, trimmed) name pair.
    pub fn identity_key(&self) -> String {
        match self.contact_id {
            Some(id) => format!("id:{id}"),
            None => format!(
                "name:{}|{}",
                normalize(self.first_name.as_deref()),
                normalize(self.last_name.as_deref())
            ),
        }
    }

    /// Union `other` into `self`: fields fill gaps only and never overwrite a value
    /// already known.
    pub fn merge_from(&mut self, other: &ContactNode) {
        if self.contact_id.is_none() {
            self.contact_id = other.contact_id;
        }
        if self.first_name.is_none() {
            self.first_name = other.first_name.clone();
        }
        if self.last_name.is_none() {
            self.last_name = other.last_name.clone();
        }
        if self.title.is_none() {
            self.title = other.title.clone();
        }
        if self.email.is_none() {
            self.email = other.email.clone();
        }
        if self.phone_mobile.is_none() {
            self.phone_mobile = other.phone_mobile.clone();
        }
        if self.phone_office.is_none() {
            self.phone_office = other.phone_office.clone();
        }
    }
}

fn normalize(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_lowercase()
}

/// One JETNET relationship row: an aircraft linked to a company, optionally through
/// a named contact, tagged with a relationship-type string such as `Owner` or
/// `Previous Operator`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelationshipEdge {
    pub aircraft_id: i64,
    pub company: CompanyNode,
    pub contact: Option<ContactNode>,
    pub relationship_type: String,
}

impl RelationshipEdge {
    /// Relationship types tagged `previous`, `former`, or `past` describe a
    /// historical association rather than a current one.
    pub fn is_current(&self) -> bool {
        let kind = self.relationship_type.to_lowercase();
        !(kind.contains("previous") || kind.contains("former") || kind.contains("past"))
    }
}
