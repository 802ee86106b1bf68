use chrono::{DateTime, Utc};

use crate::{
    pkg::internal::{
        adaptors::{
            jobs::{selectors::JobSelector, spec::RawJobPosting, store::JobStore},
            users::spec::Identity,
        },
        auth::{IdentityProvider, LocalIdentityProvider, Session, UserRecord},
        filter::FilterState,
        gate::{capabilities, Capabilities},
        policy::AppConfig,
        saved::{SavedJobs, SavedScope, StoredSavedJobs},
        seed,
        storage::{get_json_or_skip, get_records, keys, set_json, KvStore},
    },
    prelude::Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Homepage,
    Auth,
    PostJob,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthForm {
    Login,
    Register,
    ForgotPassword,
}

pub struct AppState {
    pub jobs: JobStore,
    pub filters: FilterState,
    pub session: Session,
    pub saved: SavedJobs,
    pub config: AppConfig,
    pub view: View,
    pub auth_form: AuthForm,
    pub selected_job: Option<String>,
    pub base_url: String,
    loaded: bool,
    identity: Box<dyn IdentityProvider>,
    store: Box<dyn KvStore>,
    clock: Clock,
}

impl AppState {
    pub fn new(store: Box<dyn KvStore>, identity: Box<dyn IdentityProvider>, base_url: &str) -> Self {
        AppState {
            jobs: JobStore::new(),
            filters: FilterState::new(),
            session: Session::Anonymous,
            saved: SavedJobs::new(),
            config: AppConfig::default(),
            view: View::Homepage,
            auth_form: AuthForm::Login,
            selected_job: None,
            base_url: base_url.to_string(),
            loaded: false,
            identity,
            store,
            clock: Clock::System,
        }
    }

    pub fn open(store: Box<dyn KvStore>, auto_verify_email: bool, base_url: &str) -> Result<Self> {
        let users = get_records::<UserRecord>(&*store, keys::USERS)?
            .unwrap_or_else(|| seed::users().into_iter().map(UserRecord::from).collect());
        let identity = LocalIdentityProvider::new(users, auto_verify_email);
        let mut state = AppState::new(store, Box::new(identity), base_url);
        state.load_data()?;
        Ok(state)
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn load_data(&mut self) -> Result<()> {
        self.jobs = match get_records::<RawJobPosting>(&*self.store, keys::JOBS)? {
            Some(records) => JobStore::from_raw(records),
            None => JobStore::from_postings(seed::jobs()),
        };
        self.config = get_json_or_skip::<AppConfig>(&*self.store, keys::CONFIG)?.unwrap_or_default();
        self.session = get_json_or_skip::<Option<Identity>>(&*self.store, keys::CURRENT_USER)?
            .flatten()
            .map(|identity| Session::from_identity(identity.normalized()))
            .unwrap_or_default();
        self.saved = get_json_or_skip::<StoredSavedJobs>(&*self.store, keys::SAVED_JOBS)?
            .map(SavedJobs::from)
            .unwrap_or_default();
        self.loaded = true;
        tracing::debug!("loaded {} jobs", self.jobs.len());
        Ok(())
    }

    pub fn persist(&mut self) -> Result<()> {
        let jobs = JobSelector::new(&self.jobs).get_all().to_vec();
        set_json(&mut *self.store, keys::JOBS, &jobs)?;
        if let Some(users) = self.identity.export_users() {
            set_json(&mut *self.store, keys::USERS, &users)?;
        }
        set_json(&mut *self.store, keys::CONFIG, &self.config)?;
        set_json(&mut *self.store, keys::SAVED_JOBS, &self.saved.to_stored())?;
        match self.session.identity() {
            Some(identity) => set_json(&mut *self.store, keys::CURRENT_USER, identity)?,
            None => self.store.remove(keys::CURRENT_USER)?,
        }
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn identity_provider(&self) -> &dyn IdentityProvider {
        &*self.identity
    }

    pub fn identity_provider_mut(&mut self) -> &mut dyn IdentityProvider {
        &mut *self.identity
    }

    pub fn saved_scope(&self) -> SavedScope {
        SavedScope::of(&self.session)
    }

    pub fn is_saved(&self, job_id: &str) -> bool {
        self.saved.contains(&self.saved_scope(), job_id)
    }

    pub fn capabilities(&self) -> Capabilities {
        capabilities(&self.session)
    }
}
