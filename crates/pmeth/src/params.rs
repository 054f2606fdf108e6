//! The `paramset` string control.
//!
//! Accepts three spellings of a parameter set:
//!
//! - a single letter (case-insensitive) naming a CryptoPro set of the
//!   family, `0` for the 2001 test curve;
//! - `X` followed by a letter, naming an exchange set;
//! - any textual identifier known to the [`NameRegistry`], provided it is
//!   also in the family's canonical table.

use gostpk_core::{NameRegistry, Nid, PKey};

use crate::context::GostPmethData;
use crate::ctrl::Ctrl;
use crate::error::{report, PmethError, PmethResult};
use crate::family::Family;

/// Name of the parameter-set string control.
pub const PARAM_CTRL: &str = "paramset";

/// Outcome of a string control that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Applied,
    /// The control name belongs to someone else.
    NotApplicable,
}

/// Resolves a `paramset` value for `family`.
pub fn resolve_param_set(
    family: &Family,
    registry: &dyn NameRegistry,
    value: &str,
) -> PmethResult<Nid> {
    let mut chars = value.chars();
    let short = match (chars.next(), chars.next(), chars.next()) {
        (Some(code), None, _) => Some(family.letter_code(code)),
        (Some(x), Some(code), None)
            if x.eq_ignore_ascii_case(&'X') && !family.exchange_codes.is_empty() =>
        {
            Some(family.exchange_code(code))
        }
        _ => None,
    };

    if let Some(resolved) = short {
        return resolved.ok_or(PmethError::InvalidParamSet);
    }

    let nid = registry
        .txt2nid(value)
        .ok_or(PmethError::InvalidParamSet)?;
    if !family.has_param_set(nid) {
        tracing::debug!(%nid, family = %family.algorithm, "parameter set outside family table");
        return Err(PmethError::InvalidParamSet);
    }
    Ok(nid)
}

impl GostPmethData {
    /// String control entry point for the asymmetric methods.
    pub fn ctrl_str(
        &mut self,
        family: &Family,
        registry: &dyn NameRegistry,
        key: Option<&PKey>,
        name: &str,
        value: Option<&str>,
    ) -> PmethResult<Handled> {
        if name != PARAM_CTRL {
            return Ok(Handled::NotApplicable);
        }

        let value = value.ok_or_else(|| report("ctrl_str", PmethError::InvalidParamSet))?;
        let nid = resolve_param_set(family, registry, value).map_err(|e| report("ctrl_str", e))?;
        self.ctrl(key, Ctrl::SetParamSet(nid))?;
        Ok(Handled::Applied)
    }
}
