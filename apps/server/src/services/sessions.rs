//! In-memory puzzle sessions, one per mounted room page.
//!
//! Nothing here outlives the process. A session is dropped when the client
//! deletes it (navigating away) or once it has sat idle for the store's TTL,
//! and is never written anywhere.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use cafe_core::{MatchingRoom, MixingRoom, PuzzleRoom, Room, RoomId};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{RoomSnapshot, SessionResponse};

#[derive(Debug)]
struct Session {
    room: Room,
    last_touched: Instant,
}

impl Session {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.last_touched) >= ttl
    }
}

/// Registry of live sessions.
#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Session>>,
    ttl: Duration,
}

impl SessionStore {
    /// Create a store that evicts sessions idle for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>> {
        self.sessions
            .lock()
            .map_err(|_| ApiError::Internal("session store lock poisoned".to_string()))
    }

    /// Mount a fresh room and return its session.
    ///
    /// Idle sessions are swept first so repeated opens can not grow the
    /// store without bound.
    pub fn open(&self, room_id: RoomId) -> Result<SessionResponse> {
        let room = Room::open(room_id, &mut rand::thread_rng());
        let id = Uuid::new_v4();
        let response = snapshot(id, &room);

        let mut sessions = self.lock()?;
        let now = Instant::now();
        sessions.retain(|_, session| !session.is_expired(now, self.ttl));
        sessions.insert(
            id,
            Session {
                room,
                last_touched: now,
            },
        );
        Ok(response)
    }

    /// Run `f` against a session while holding the store lock.
    ///
    /// The lock is never held across an await point, so a gesture applies
    /// atomically with respect to every other gesture. An expired session
    /// is evicted and reported as not found.
    pub fn with_session<T, F>(&self, id: Uuid, f: F) -> Result<T>
    where
        F: FnOnce(&mut Room) -> Result<T>,
    {
        let mut sessions = self.lock()?;
        let now = Instant::now();
        if sessions
            .get(&id)
            .map_or(false, |session| session.is_expired(now, self.ttl))
        {
            sessions.remove(&id);
            tracing::debug!("Session {} expired", id);
        }

        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound(format!("Session {}", id)))?;
        session.last_touched = now;
        f(&mut session.room)
    }

    pub fn get(&self, id: Uuid) -> Result<SessionResponse> {
        self.with_session(id, |room| Ok(snapshot(id, room)))
    }

    /// Discard a session. Returns whether it existed.
    pub fn remove(&self, id: Uuid) -> Result<bool> {
        Ok(self.lock()?.remove(&id).is_some())
    }

    /// Drop every idle session; returns how many went.
    pub fn purge_expired(&self) -> Result<usize> {
        let mut sessions = self.lock()?;
        let before = sessions.len();
        let now = Instant::now();
        sessions.retain(|_, session| !session.is_expired(now, self.ttl));
        Ok(before - sessions.len())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }
}

/// Current state of a session for the client.
pub fn snapshot(id: Uuid, room: &Room) -> SessionResponse {
    let view = match room {
        Room::Matching(room) => RoomSnapshot::Matching(room.view()),
        Room::Mixing(room) => RoomSnapshot::Mixing(room.view()),
    };
    SessionResponse {
        session_id: id,
        room: room.id(),
        view,
    }
}

/// Borrow a Room 1/3 session, refusing Room 2.
pub fn as_matching(room: &mut Room) -> Result<&mut MatchingRoom> {
    match room {
        Room::Matching(room) => Ok(room),
        Room::Mixing(_) => Err(ApiError::BadRequest(
            "session is not a slot-matching room".to_string(),
        )),
    }
}

/// Borrow a Room 2 session, refusing the others.
pub fn as_mixing(room: &mut Room) -> Result<&mut MixingRoom> {
    match room {
        Room::Mixing(room) => Ok(room),
        Room::Matching(_) => Err(ApiError::BadRequest(
            "session is not a mixing room".to_string(),
        )),
    }
}
