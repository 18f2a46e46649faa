//! Persona-weighted contact ranking.
//!
//! One ranking function parameterized by an explicit [`PersonaWeights`] table.
//! Relationship edges are grouped by `(contact, company)`, scored against the
//! persona's signal weights, tiered, then deduplicated across companies by
//! contact identity with field-unioning merges.

use std::collections::HashMap;

use crate::model::{
    contact::{BrokerContact, ContactTier},
    relationship::{ContactNode, RelationshipGraph},
};

/// Role-based weighting profile for a consumer of the ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persona {
    Broker,
    Fbo,
    Mro,
}

/// Signal weight table. Scores are the clamped sum of matched weights; any table
/// may be passed in, with [`PersonaWeights::for_persona`] supplying the built-in
/// presets.
#[derive(Clone, Debug)]
pub struct PersonaWeights {
    pub owner: u32,
    pub operator: u32,
    pub manager: u32,
    pub chief_pilot: u32,
    pub director_of_aviation: u32,
    pub director_of_maintenance: u32,
    pub scheduler: u32,
    pub dispatch: u32,
    pub finance: u32,
    pub executive_assistant: u32,
    pub email_present: u32,
    pub mobile_present: u32,
}

impl PersonaWeights {
    pub fn for_persona(persona: Persona) -> Self {
        match persona {
            Persona::Broker => Self {
                owner: 40,
                operator: 32,
                manager: 26,
                chief_pilot: 18,
                director_of_aviation: 20,
                director_of_maintenance: 10,
                scheduler: 8,
                dispatch: 6,
                finance: 14,
                executive_assistant: 10,
                email_present: 10,
                mobile_present: 15,
            },
            Persona::Fbo => Self {
                owner: 30,
                operator: 34,
                manager: 24,
                chief_pilot: 22,
                director_of_aviation: 18,
                director_of_maintenance: 12,
                scheduler: 16,
                dispatch: 14,
                finance: 6,
                executive_assistant: 8,
                email_present: 10,
                mobile_present: 15,
            },
            Persona::Mro => Self {
                owner: 28,
                operator: 30,
                manager: 22,
                chief_pilot: 18,
                director_of_aviation: 16,
                director_of_maintenance: 26,
                scheduler: 8,
                dispatch: 8,
                finance: 6,
                executive_assistant: 6,
                email_present: 10,
                mobile_present: 15,
            },
        }
    }
}

/// Rank the graph's contacts for a persona.
pub fn rank(graph: &RelationshipGraph, persona: Persona) -> Vec<BrokerContact> {
    rank_with_weights(graph, &PersonaWeights::for_persona(persona))
}

pub fn rank_with_weights(graph: &RelationshipGraph, weights: &PersonaWeights) -> Vec<BrokerContact> {
    // Phase 1: group edges by (contact identity, company), merging contact
    // fields within a group so a contact listed twice at one company keeps all
    // known channels.
    let mut groups: HashMap<(String, Option<i64>), Group> = HashMap::new();
    for edge in &graph.edges {
        let Some(contact) = &edge.contact else {
            continue;
        };

        let key = (contact.identity_key(), edge.company.company_id);
        let group = groups.entry(key).or_insert_with(|| Group {
            contact: contact.clone(),
            company_id: edge.company.company_id,
            company_name: edge.company.name.clone(),
            relationship_types: Vec::new(),
        });

        group.contact.merge_from(contact);
        if group.company_name.is_none() {
            group.company_name = edge.company.name.clone();
        }
        group
            .relationship_types
            .push(edge.relationship_type.to_lowercase());
    }

    // Phase 2: score and tier each group.
    let scored = groups.into_values().map(|group| score_group(group, weights));

    // Phase 3: deduplicate across companies by contact identity.
    let mut merged: HashMap<String, BrokerContact> = HashMap::new();
    for contact in scored {
        let key = dedup_key(&contact);
        match merged.get_mut(&key) {
            None => {
                merged.insert(key, contact);
            }
            Some(existing) => merge_duplicate(existing, contact),
        }
    }

    let mut ranked: Vec<BrokerContact> = merged.into_values().collect();
    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| name_sort_key(a).cmp(&name_sort_key(b)))
    });
    ranked
}

struct Group {
    contact: ContactNode,
    company_id: Option<i64>,
    company_name: Option<String>,
    relationship_types: Vec<String>,
}

fn score_group(group: Group, weights: &PersonaWeights) -> BrokerContact {
    let mut score: u32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    let mut apply = |points: u32, reason: &str| {
        score += points;
        reasons.push(reason.to_string());
    };

    let has_relation = |needle: &str| {
        group
            .relationship_types
            .iter()
            .any(|kind| kind.contains(needle))
    };

    let is_owner = has_relation("owner");
    let is_operator = has_relation("operator");
    let is_manager = has_relation("manager");

    if is_owner {
        apply(weights.owner, "Owner relationship");
    }
    if is_operator {
        apply(weights.operator, "Operator relationship");
    }
    if is_manager {
        apply(weights.manager, "Manager relationship");
    }

    let title = group
        .contact
        .title
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    let ops_title = title.contains("chief pilot")
        || title.contains("director of aviation")
        || is_director_of_maintenance(&title)
        || title.contains("scheduler")
        || title.contains("dispatch");
    let finance_title = title.contains("cfo") || title.contains("controller");
    let assistant_title = title.contains("executive assistant");

    if title.contains("chief pilot") {
        apply(weights.chief_pilot, "Chief pilot");
    }
    if title.contains("director of aviation") {
        apply(weights.director_of_aviation, "Director of aviation");
    }
    if is_director_of_maintenance(&title) {
        apply(weights.director_of_maintenance, "Director of maintenance");
    }
    if title.contains("scheduler") {
        apply(weights.scheduler, "Scheduler");
    }
    if title.contains("dispatch") {
        apply(weights.dispatch, "Dispatch");
    }
    if finance_title {
        apply(weights.finance, "Finance decision maker");
    }
    if assistant_title {
        apply(weights.executive_assistant, "Executive assistant");
    }

    let mut preferred_channels = Vec::new();
    if group.contact.email.is_some() {
        apply(weights.email_present, "Email on file");
        preferred_channels.push("email".to_string());
    }
    if group.contact.phone_mobile.is_some() {
        apply(weights.mobile_present, "Mobile phone on file");
        preferred_channels.push("mobile".to_string());
    }
    if group.contact.phone_office.is_some() {
        preferred_channels.push("office".to_string());
    }

    let score = score.min(100);

    // First match wins.
    let tier = if (is_owner || is_operator || is_manager) && score >= 40 {
        ContactTier::Primary
    } else if ops_title {
        ContactTier::AviationOps
    } else if finance_title {
        ContactTier::FinanceAdmin
    } else if assistant_title || score >= 20 {
        ContactTier::Secondary
    } else {
        ContactTier::Historical
    };

    BrokerContact {
        contact_id: group.contact.contact_id,
        first_name: group.contact.first_name,
        last_name: group.contact.last_name,
        title: group.contact.title,
        company_name: group.company_name,
        company_id: group.company_id,
        emails: group.contact.email.into_iter().collect(),
        phone_mobile: group.contact.phone_mobile,
        phone_office: group.contact.phone_office,
        score,
        tier,
        match_reasons: reasons,
        preferred_channels,
    }
}

/// The word "DOM" is industry shorthand for director of maintenance; match it as
/// a whole word so titles like "domestic operations" stay out.
fn is_director_of_maintenance(title: &str) -> bool {
    title.contains("director of maintenance")
        || title
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| word == "dom")
}

fn dedup_key(contact: &BrokerContact) -> String {
    match contact.contact_id {
        Some(id) => format!("id:{id}"),
        None => format!(
            "name:{}|{}",
            contact
                .first_name
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_lowercase(),
            contact
                .last_name
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_lowercase()
        ),
    }
}

/// On a cross-company collision keep the higher score's tier, reasons, and
/// company, union emails, fill missing phones, and union preferred channels.
/// Score ties break toward the lower company id so the merged result never
/// depends on map iteration order.
fn merge_duplicate(existing: &mut BrokerContact, incoming: BrokerContact) {
    let incoming_wins = incoming.score > existing.score
        || (incoming.score == existing.score
            && company_merge_key(&incoming) < company_merge_key(existing));
    let (keep, other) = if incoming_wins {
        let displaced = std::mem::replace(existing, incoming);
        (existing, displaced)
    } else {
        (existing, incoming)
    };

    for email in other.emails {
        if !keep.emails.contains(&email) {
            keep.emails.push(email);
        }
    }
    if keep.phone_mobile.is_none() {
        keep.phone_mobile = other.phone_mobile;
    }
    if keep.phone_office.is_none() {
        keep.phone_office = other.phone_office;
    }
    if keep.first_name.is_none() {
        keep.first_name = other.first_name;
    }
    if keep.last_name.is_none() {
        keep.last_name = other.last_name;
    }
    if keep.title.is_none() {
        keep.title = other.title;
    }
    for channel in other.preferred_channels {
        if !keep.preferred_channels.contains(&channel) {
            keep.preferred_channels.push(channel);
        }
    }
}

fn company_merge_key(contact: &BrokerContact) -> (i64, String) {
    (
        contact.company_id.unwrap_or(i64::MAX),
        contact
            .company_name
            .as_deref()
            .unwrap_or_default()
            .to_lowercase(),
    )
}

fn name_sort_key(contact: &BrokerContact) -> (String, String) {
    (
        contact
            .last_name
            .as_deref()
            .unwrap_or_default()
            .to_lowercase(),
        contact
            .first_name
            .as_deref()
            .unwrap_or_default()
            .to_lowercase(),
    )
}
