use crate::{DashboardError, DashboardResult, UserDirectory};

use ud_core::{Provenance, User, UserId};
use ud_store::LocalRecordStore;

use log::{info, warn};

/// A merged-list record tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry {
    pub user: User,
    pub provenance: Provenance,
}

/// Remote and local users merged into one list.
///
/// Mutations of local-origin entries write through to the
/// [`LocalRecordStore`]; remote-origin entries change in memory only and
/// come back unchanged on the next [`load`](Self::load).
pub struct UserRepository {
    store: LocalRecordStore,
    entries: Vec<UserEntry>,
}

impl UserRepository {
    pub fn new(store: LocalRecordStore) -> Self {
        Self {
            store,
            entries: Vec::new(),
        }
    }

    /// Fetch the directory and read local storage concurrently, then
    /// replace the in-memory list with remote entries followed by local ones.
    ///
    /// A remote failure discards both results and leaves the list empty.
    pub async fn load<D>(&mut self, directory: &D) -> DashboardResult<()>
    where
        D: UserDirectory + ?Sized,
    {
        self.entries.clear();

        let store = &self.store;
        let (remote, local) = tokio::join!(directory.fetch_users(), async { store.load() });

        let remote = remote.inspect_err(|e| warn!("Directory fetch failed: {e}"))?;
        let local = local?;

        let remote_count = remote.len();
        let local_count = local.len();

        self.entries = remote
            .into_iter()
            .map(|user| tag(user, Provenance::Remote))
            .chain(local.into_iter().map(|user| tag(user, Provenance::Local)))
            .collect();

        info!("Loaded {remote_count} remote and {local_count} local users");
        Ok(())
    }

    pub fn entries(&self) -> &[UserEntry] {
        &self.entries
    }

    pub fn list(&self) -> Vec<User> {
        self.entries.iter().map(|e| e.user.clone()).collect()
    }

    pub fn get(&self, id: UserId) -> Option<&UserEntry> {
        self.entries.iter().find(|e| e.user.id == id)
    }

    /// Persist a new local user and add it to the end of the list.
    pub fn create(&mut self, user: User) -> DashboardResult<()> {
        self.store.append(&user)?;
        info!("Created user {} ({})", user.id, user.name);
        self.entries.push(tag(user, Provenance::Local));
        Ok(())
    }

    /// Replace the entry with `user.id`, writing through when it is local.
    pub fn update(&mut self, user: User) -> DashboardResult<Provenance> {
        let id = user.id;
        let provenance = self
            .get(id)
            .map(|e| e.provenance)
            .ok_or_else(|| DashboardError::user_not_found(id))?;

        self.persist(provenance, id, |store| store.replace(id, &user))?;

        for entry in self.entries.iter_mut().filter(|e| e.user.id == id) {
            entry.user = user.clone();
        }
        info!("Updated user {id} ({provenance})");
        Ok(provenance)
    }

    /// Remove the entry with `id`, writing through when it is local.
    pub fn delete(&mut self, id: UserId) -> DashboardResult<UserEntry> {
        let entry = self
            .get(id)
            .cloned()
            .ok_or_else(|| DashboardError::user_not_found(id))?;

        self.persist(entry.provenance, id, |store| store.remove(id))?;

        self.entries.retain(|e| e.user.id != id);
        info!("Deleted user {id} ({})", entry.provenance);
        Ok(entry)
    }

    fn persist<F>(&self, provenance: Provenance, id: UserId, write: F) -> DashboardResult<()>
    where
        F: FnOnce(&LocalRecordStore) -> ud_store::StoreResult<bool>,
    {
        if !provenance.is_persisted() {
            warn!("User {id} is remote-origin; change kept in memory only");
            return Ok(());
        }
        if !write(&self.store)? {
            warn!("Local user {id} was not in storage");
        }
        Ok(())
    }
}

fn tag(user: User, provenance: Provenance) -> UserEntry {
    if user.provenance() != provenance {
        warn!(
            "User {} is {provenance} but its id falls in the {} range",
            user.id,
            user.provenance()
        );
    }
    UserEntry { user, provenance }
}
