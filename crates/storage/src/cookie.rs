//! Cookie jar over a host store
//!
//! Cookies are stored one record per name as JSON. Expiry is checked on
//! read: an expired cookie is purged and reported absent. Writing a cookie
//! whose expiry is already in the past deletes it, which is how removal
//! works.

use crate::degrade;
use chrono::{DateTime, TimeDelta, Utc};
use lull_core::{KeyValueStore, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Latest expiry stored: 9999-12-31T23:59:59Z
const MAX_EXPIRY_TIMESTAMP: i64 = 253_402_300_799;

fn max_expiry() -> DateTime<Utc> {
    DateTime::from_timestamp(MAX_EXPIRY_TIMESTAMP, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Attributes accepted by `CookieJar::set_cookie`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieOptions {
    /// Lifetime from now. `None` or zero makes a session cookie; negative
    /// values expire the cookie immediately.
    pub expires_in: Option<TimeDelta>,
    /// Defaults to `/`
    pub path: Option<String>,
    pub domain: Option<String>,
}

impl CookieOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifetime in minutes, saturating at the largest representable span
    pub fn expires_in_minutes(mut self, minutes: i64) -> Self {
        let delta = TimeDelta::try_minutes(minutes).unwrap_or(if minutes < 0 {
            TimeDelta::MIN
        } else {
            TimeDelta::MAX
        });
        self.expires_in = Some(delta);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// A stored cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    /// `None` for session cookies
    pub expires: Option<DateTime<Utc>>,
    pub path: String,
    pub domain: Option<String>,
    pub secure: bool,
}

impl Cookie {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires.is_some_and(|expires| expires <= now)
    }

    /// Render as a `Set-Cookie` style attribute string
    ///
    /// `name=value; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/; domain=d; secure`
    pub fn to_set_cookie_string(&self) -> String {
        let mut out = format!("{}={}", self.name, self.value);
        if let Some(expires) = self.expires {
            out.push_str("; expires=");
            out.push_str(&expires.format("%a, %d %b %Y %H:%M:%S GMT").to_string());
        }
        out.push_str("; path=");
        out.push_str(&self.path);
        if let Some(domain) = &self.domain {
            out.push_str("; domain=");
            out.push_str(domain);
        }
        if self.secure {
            out.push_str("; secure");
        }
        out
    }
}

/// Find cookie `name` in a `;`-separated cookie header
///
/// Leading spaces of each pair are skipped and the first match wins.
pub fn lookup<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let pair = pair.trim_start_matches(' ');
        pair.strip_prefix(name)?.strip_prefix('=')
    })
}

/// Whether `name` is a valid cookie name (an RFC 6265 token)
pub fn is_valid_name(name: &str) -> bool {
    const SEPARATORS: &str = "()<>@,;:\\\"/[]?={}";
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_graphic() && !SEPARATORS.contains(c))
}

/// Cookie accessor
pub struct CookieJar<S> {
    host: Option<S>,
    secure: bool,
    clock: fn() -> DateTime<Utc>,
}

impl<S: KeyValueStore> CookieJar<S> {
    /// Jar over an available host store
    pub fn new(host: S) -> Self {
        Self {
            host: Some(host),
            secure: false,
            clock: Utc::now,
        }
    }

    /// Jar for a context with no host store; every call degrades
    pub fn unavailable() -> Self {
        Self {
            host: None,
            secure: false,
            clock: Utc::now,
        }
    }

    /// Mark every cookie this jar writes as secure
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Replace the wall clock used for expiry
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn is_available(&self) -> bool {
        self.host.is_some()
    }

    /// Store cookie `name`. An expiry in the past removes it.
    pub fn set_cookie(&self, name: &str, value: &str, options: &CookieOptions) {
        if !is_valid_name(name) {
            warn!("Ignoring cookie with invalid name {:?}", name);
            return;
        }

        let now = (self.clock)();
        let expires = options
            .expires_in
            .filter(|delta| !delta.is_zero())
            .map(|delta| expiry_after(now, delta));

        let cookie = Cookie {
            name: name.to_string(),
            value: value.to_string(),
            expires,
            path: options.path.clone().unwrap_or_else(|| "/".to_string()),
            domain: options.domain.clone(),
            secure: self.secure,
        };

        self.attempt("setting cookie", (), |host| {
            if cookie.is_expired_at(now) {
                debug!("Cookie {} expired on write, removing", name);
                return host.remove(name);
            }
            host.set(name, &serde_json::to_string(&cookie)?)
        });
    }

    /// Value of cookie `name`, if present and not expired
    pub fn get_cookie(&self, name: &str) -> Option<String> {
        self.get(name).map(|cookie| cookie.value)
    }

    /// Full record of cookie `name`, if present and not expired
    pub fn get(&self, name: &str) -> Option<Cookie> {
        let now = (self.clock)();
        self.attempt("getting cookie", None, |host| read_live(host, name, now))
    }

    /// Remove cookie `name` by writing it already expired
    pub fn remove_cookie(&self, name: &str, path: Option<&str>, domain: Option<&str>) {
        let options = CookieOptions {
            expires_in: TimeDelta::try_minutes(-1),
            path: path.map(str::to_string),
            domain: domain.map(str::to_string),
        };
        self.set_cookie(name, "", &options);
    }

    pub fn cookie_exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Every live cookie, in host key order
    pub fn cookies(&self) -> Vec<Cookie> {
        let now = (self.clock)();
        self.attempt("listing cookies", Vec::new(), |host| {
            let mut live = Vec::new();
            for name in host.keys()? {
                match read_live(host, &name, now) {
                    Ok(Some(cookie)) => live.push(cookie),
                    Ok(None) => {}
                    Err(e) => warn!("Skipping unreadable cookie {}: {}", name, e),
                }
            }
            Ok(live)
        })
    }

    /// Live cookies as a request header: `a=1; b=2`
    pub fn header(&self) -> String {
        self.cookies()
            .iter()
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn attempt<R>(&self, action: &str, fallback: R, op: impl FnOnce(&S) -> Result<R>) -> R {
        degrade::attempt(self.host.as_ref(), "cookie jar", action, fallback, op)
    }
}

/// `now + delta`, clamped to the storable expiry range
fn expiry_after(now: DateTime<Utc>, delta: TimeDelta) -> DateTime<Utc> {
    match now.checked_add_signed(delta) {
        Some(expires) if expires <= max_expiry() => expires,
        Some(_) => max_expiry(),
        None if delta < TimeDelta::zero() => DateTime::<Utc>::MIN_UTC,
        None => {
            warn!("Cookie lifetime {} overflows, capping expiry", delta);
            max_expiry()
        }
    }
}

/// Read cookie `name`, purging it if expired
fn read_live<S: KeyValueStore>(host: &S, name: &str, now: DateTime<Utc>) -> Result<Option<Cookie>> {
    let Some(raw) = host.get(name)? else {
        return Ok(None);
    };

    let cookie: Cookie = serde_json::from_str(&raw)?;
    if cookie.is_expired_at(now) {
        debug!("Purging expired cookie {}", name);
        host.remove(name)?;
        return Ok(None);
    }
    Ok(Some(cookie))
}
