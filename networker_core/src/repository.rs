use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::{
    Contact, ContactUpdate, Edge, Interaction, NewContact, NewEdge, NewInteraction,
};

/// Storage for contacts, interactions and edges.
///
/// Every contact lookup is scoped to a user; a contact owned by another user
/// behaves as if it did not exist.
#[async_trait]
pub trait ContactRepo: Send + Sync {
    async fn create_contact(&self, contact: NewContact) -> anyhow::Result<Contact>;

    async fn get_contact(&self, id: &Uuid, user_id: &str) -> anyhow::Result<Option<Contact>>;

    /// Most recently updated first.
    async fn list_contacts(
        &self,
        user_id: &str,
        limit: usize,
        offset: usize,
    ) -> anyhow::Result<Vec<Contact>>;

    async fn update_contact(
        &self,
        id: &Uuid,
        user_id: &str,
        update: ContactUpdate,
    ) -> anyhow::Result<Option<Contact>>;

    /// Case-insensitive substring match on either name.
    async fn find_contacts_by_name(&self, user_id: &str, name: &str)
    -> anyhow::Result<Vec<Contact>>;

    async fn create_interaction(&self, interaction: NewInteraction) -> anyhow::Result<Interaction>;

    /// Newest first.
    async fn interactions_for_contact(&self, contact_id: &Uuid)
    -> anyhow::Result<Vec<Interaction>>;

    async fn create_edge(&self, edge: NewEdge) -> anyhow::Result<Edge>;

    /// Edges where the contact is either endpoint.
    async fn edges_for_contact(&self, contact_id: &Uuid) -> anyhow::Result<Vec<Edge>>;

    async fn contact_count(&self, user_id: &str) -> anyhow::Result<usize>;

    async fn interaction_count(&self, user_id: &str) -> anyhow::Result<usize>;
}
