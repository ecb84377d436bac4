//! In-memory source with scripted responses.
//!
//! Responses are queued per `(page, filter)`. A response can be gated so the
//! test decides when it resolves, which makes completion order explicit:
//! issue two fetches, open the second gate first, then the first.
//!
//! Test support only. The binary never constructs a [`ScriptedSource`].

use crate::model::{
    Category, FetchError, Gender, Location, Login, Name, PageNumber, Picture, Street, User, UserId,
};
use crate::source::{PageBatch, PageInfo, RecordFetch};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::{oneshot, Notify};

/// Release handle for a gated response.
///
/// Dropping the gate without opening it also releases the response.
#[derive(Debug)]
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    /// Let the gated fetch resolve.
    pub fn open(self) {
        let _ = self.0.send(());
    }
}

#[derive(Debug)]
struct Scripted {
    result: Result<Vec<User>, FetchError>,
    gate: Option<oneshot::Receiver<()>>,
}

#[derive(Debug, Default)]
struct Script {
    responses: HashMap<(PageNumber, Category), VecDeque<Scripted>>,
    calls: Vec<(PageNumber, Category)>,
}

/// Deterministic [`RecordFetch`] implementation.
///
/// Unscripted requests fail with `InvalidRequest` so a test never silently
/// depends on a page it did not set up.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: Mutex<Script>,
    called: Notify,
}

impl ScriptedSource {
    /// Source with nothing scripted. Unscripted requests fail.
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, page: u32, filter: Category, scripted: Scripted) {
        let page = PageNumber::new(page).unwrap_or_default();
        self.script()
            .responses
            .entry((page, filter))
            .or_default()
            .push_back(scripted);
    }

    /// Queue an immediate successful response.
    pub fn respond(&self, page: u32, filter: Category, records: Vec<User>) {
        self.push(
            page,
            filter,
            Scripted {
                result: Ok(records),
                gate: None,
            },
        );
    }

    /// Queue an immediate failure.
    pub fn fail(&self, page: u32, filter: Category, error: FetchError) {
        self.push(
            page,
            filter,
            Scripted {
                result: Err(error),
                gate: None,
            },
        );
    }

    /// Queue a successful response that resolves only once the returned gate opens.
    pub fn respond_gated(&self, page: u32, filter: Category, records: Vec<User>) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.push(
            page,
            filter,
            Scripted {
                result: Ok(records),
                gate: Some(rx),
            },
        );
        Gate(tx)
    }

    /// Queue a failure that resolves only once the returned gate opens.
    pub fn fail_gated(&self, page: u32, filter: Category, error: FetchError) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.push(
            page,
            filter,
            Scripted {
                result: Err(error),
                gate: Some(rx),
            },
        );
        Gate(tx)
    }

    /// Every request received so far, in arrival order.
    pub fn calls(&self) -> Vec<(u32, Category)> {
        self.script()
            .calls
            .iter()
            .map(|(page, filter)| (page.get(), *filter))
            .collect()
    }

    /// Wait until at least `count` requests have been received.
    pub async fn wait_for_calls(&self, count: usize) {
        loop {
            let notified = self.called.notified();
            if self.script().calls.len() >= count {
                return;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl RecordFetch for ScriptedSource {
    async fn fetch(&self, page: PageNumber, filter: Category) -> Result<PageBatch, FetchError> {
        let scripted = {
            let mut script = self.script();
            script.calls.push((page, filter));
            script
                .responses
                .get_mut(&(page, filter))
                .and_then(VecDeque::pop_front)
        };
        self.called.notify_waiters();

        let Some(scripted) = scripted else {
            return Err(FetchError::invalid_request(format!(
                "no scripted response for page {page} ({filter})"
            )));
        };

        if let Some(gate) = scripted.gate {
            let _ = gate.await;
        }

        scripted.result.map(|records| PageBatch {
            info: PageInfo {
                page: page.get(),
                results: records.len() as u32,
                ..PageInfo::default()
            },
            records,
        })
    }
}

/// Build a plausible record whose identity is `id`.
///
/// Intended for tests and benchmarks.
pub fn sample_user(id: &str) -> User {
    sample_user_with_gender(id, Gender::Female)
}

/// Build a plausible record with the given identity and gender.
pub fn sample_user_with_gender(id: &str, gender: Gender) -> User {
    let user_id = UserId::new(id).unwrap_or_else(|_| {
        UserId::new("anonymous").unwrap_or_else(|_| unreachable!("non-empty literal"))
    });
    User::new(
        user_id,
        gender,
        Name {
            title: "Mx".to_string(),
            first: format!("First{id}"),
            last: format!("Last{id}"),
        },
        format!("{}@example.com", id.to_lowercase()),
        Picture {
            large: format!("https://randomuser.me/api/portraits/{id}.jpg"),
            medium: format!("https://randomuser.me/api/portraits/med/{id}.jpg"),
            thumbnail: format!("https://randomuser.me/api/portraits/thumb/{id}.jpg"),
        },
        Location {
            street: Street {
                number: 100,
                name: "Main Street".to_string(),
            },
            city: "Springfield".to_string(),
            state: "Oregon".to_string(),
            country: "United States".to_string(),
        },
        Login {
            uuid: id.to_string(),
            username: format!("user{}", id.to_lowercase()),
        },
    )
}
