use async_trait::async_trait;
use chrono::Utc;
use networker_core::{
    Contact, ContactRepo, ContactUpdate, Edge, Interaction, NewContact, NewEdge, NewInteraction,
};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct State {
    contacts: Vec<Contact>,
    interactions: Vec<Interaction>,
    edges: Vec<Edge>,
}

impl State {
    fn owned_contact_ids(&self, user_id: &str) -> Vec<Uuid> {
        self.contacts
            .iter()
            .filter(|c| c.user_id == user_id)
            .map(|c| c.id)
            .collect()
    }
}

/// In-process [`ContactRepo`] keeping records in insertion order.
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    state: RwLock<State>,
}

impl MemoryContactStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepo for MemoryContactStore {
    async fn create_contact(&self, contact: NewContact) -> anyhow::Result<Contact> {
        let now = Utc::now();
        let contact = Contact {
            id: Uuid::now_v7(),
            user_id: contact.user_id,
            english_name: contact.english_name,
            hebrew_name: contact.hebrew_name,
            company: contact.company,
            job_title: contact.job_title,
            how_met: contact.how_met,
            tags: contact.tags,
            created_at: now,
            updated_at: now,
        };
        self.state.write().await.contacts.push(contact.clone());
        Ok(contact)
    }

    async fn get_contact(&self, id: &Uuid, user_id: &str) -> anyhow::Result<Option<Contact>> {
        let state = self.state.read().await;
        Ok(state
            .contacts
            .iter()
            .find(|c| c.id == *id && c.user_id == user_id)
            .cloned())
    }

    async fn list_contacts(
        &self,
        user_id: &str,
        limit: usize,
        offset: usize,
    ) -> anyhow::Result<Vec<Contact>> {
        let state = self.state.read().await;
        let mut contacts: Vec<Contact> = state
            .contacts
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        // Stable sort keeps later inserts ahead on equal timestamps.
        contacts.reverse();
        contacts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(contacts.into_iter().skip(offset).take(limit).collect())
    }

    async fn update_contact(
        &self,
        id: &Uuid,
        user_id: &str,
        update: ContactUpdate,
    ) -> anyhow::Result<Option<Contact>> {
        let mut state = self.state.write().await;
        let Some(contact) = state
            .contacts
            .iter_mut()
            .find(|c| c.id == *id && c.user_id == user_id)
        else {
            return Ok(None);
        };
        update.apply(contact);
        contact.updated_at = Utc::now();
        Ok(Some(contact.clone()))
    }

    async fn find_contacts_by_name(
        &self,
        user_id: &str,
        name: &str,
    ) -> anyhow::Result<Vec<Contact>> {
        let state = self.state.read().await;
        Ok(state
            .contacts
            .iter()
            .filter(|c| c.user_id == user_id && c.name_contains(name))
            .cloned()
            .collect())
    }

    async fn create_interaction(&self, interaction: NewInteraction) -> anyhow::Result<Interaction> {
        let now = Utc::now();
        let interaction = Interaction {
            id: Uuid::now_v7(),
            contact_id: interaction.contact_id,
            body: interaction.body,
            occurred_at: interaction.occurred_at.unwrap_or_else(|| now.date_naive()),
            created_at: now,
        };
        self.state
            .write()
            .await
            .interactions
            .push(interaction.clone());
        Ok(interaction)
    }

    async fn interactions_for_contact(
        &self,
        contact_id: &Uuid,
    ) -> anyhow::Result<Vec<Interaction>> {
        let state = self.state.read().await;
        let mut interactions: Vec<Interaction> = state
            .interactions
            .iter()
            .filter(|i| i.contact_id == *contact_id)
            .cloned()
            .collect();
        interactions.reverse();
        interactions.sort_by(|a, b| {
            b.occurred_at
                .cmp(&a.occurred_at)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(interactions)
    }

    async fn create_edge(&self, edge: NewEdge) -> anyhow::Result<Edge> {
        let edge = Edge {
            id: Uuid::now_v7(),
            source_contact_id: edge.source_contact_id,
            target_contact_id: edge.target_contact_id,
            relation_type: edge.relation_type,
        };
        self.state.write().await.edges.push(edge.clone());
        Ok(edge)
    }

    async fn edges_for_contact(&self, contact_id: &Uuid) -> anyhow::Result<Vec<Edge>> {
        let state = self.state.read().await;
        Ok(state
            .edges
            .iter()
            .filter(|e| e.touches(contact_id))
            .cloned()
            .collect())
    }

    async fn contact_count(&self, user_id: &str) -> anyhow::Result<usize> {
        let state = self.state.read().await;
        Ok(state.contacts.iter().filter(|c| c.user_id == user_id).count())
    }

    async fn interaction_count(&self, user_id: &str) -> anyhow::Result<usize> {
        let state = self.state.read().await;
        let owned = state.owned_contact_ids(user_id);
        Ok(state
            .interactions
            .iter()
            .filter(|i| owned.contains(&i.contact_id))
            .count())
    }
}
