//! Nameserver input and address validation.

use crate::error::{ManagerError, Result};
use std::net::IpAddr;

/// Returns `true` if `address` is a syntactically valid IPv4 or IPv6 address.
///
/// ```
/// use resolvconf_manager::is_valid_address;
///
/// assert!(is_valid_address("10.0.0.1"));
/// assert!(is_valid_address("2001:db8::1"));
/// assert!(!is_valid_address("13.37.h4.x0rz"));
/// ```
#[must_use]
pub fn is_valid_address(address: &str) -> bool {
    address.parse::<IpAddr>().is_ok()
}

/// The addresses to inject.
///
/// `head` becomes the first nameserver of the generated resolver file; `base`
/// entries are added after it. Empty strings are dropped on construction, so
/// an empty head or an empty base list both mean "leave that fragment alone".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nameservers {
    /// Address written as the first nameserver.
    pub head: Option<String>,

    /// Additional nameservers.
    pub base: Vec<String>,
}

impl Nameservers {
    /// Creates a nameserver set.
    #[must_use]
    pub fn new<I, S>(head: Option<impl Into<String>>, base: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            head: head.map(Into::into).filter(|h| !h.is_empty()),
            base: base
                .into_iter()
                .map(Into::into)
                .filter(|b| !b.is_empty())
                .collect(),
        }
    }

    /// Only a head address.
    #[must_use]
    pub fn head(address: impl Into<String>) -> Self {
        Self::new(Some(address), Vec::<String>::new())
    }

    /// Only base addresses.
    #[must_use]
    pub fn base<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(None::<String>, addresses)
    }

    /// Returns `true` if neither a head nor any base address is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none() && self.base.is_empty()
    }

    /// Fails with [`ManagerError::MissingAddress`] when nothing was supplied.
    ///
    /// # Errors
    ///
    /// See above.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ManagerError::MissingAddress);
        }
        Ok(())
    }

    /// Checks every address with [`is_valid_address`].
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError::InvalidAddress`] for the first malformed entry,
    /// head first.
    pub fn validate(&self) -> Result<()> {
        match self.iter().find(|a| !is_valid_address(a)) {
            Some(bad) => Err(ManagerError::InvalidAddress {
                address: bad.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Iterates over all addresses, head first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.head
            .as_deref()
            .into_iter()
            .chain(self.base.iter().map(String::as_str))
    }
}
