use tern_config::{ChannelConfig, TernConfig};

use crate::error::{Error, Result};

/// How strictly a missing `to` is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// The caller must name a destination; no config fallback.
    Explicit,
    /// A missing destination falls back to the account's `default_to`.
    Implicit,
}

/// Unresolved send request as the caller phrased it.
#[derive(Debug, Clone, Copy)]
pub struct OutboundRequest<'a> {
    pub channel: &'a str,
    pub account_id: Option<&'a str>,
    pub to: Option<&'a str>,
}

/// Fully resolved outbound target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub channel: String,
    pub account_id: String,
    pub to: String,
}

/// Resolves an outbound request against config.
///
/// A trait so dispatch can be tested with a scripted resolver.
pub trait OutboundResolver: Send + Sync {
    fn resolve(
        &self,
        cfg: &TernConfig,
        req: OutboundRequest<'_>,
        mode: ResolveMode,
    ) -> Result<ResolvedTarget>;
}

/// [`OutboundResolver`] that walks the account cascade in config.
pub struct ConfigResolver;

impl OutboundResolver for ConfigResolver {
    fn resolve(
        &self,
        cfg: &TernConfig,
        req: OutboundRequest<'_>,
        mode: ResolveMode,
    ) -> Result<ResolvedTarget> {
        resolve_outbound_target(cfg, req, mode)
    }
}

/// Resolve channel + account + destination for an outbound send.
///
/// Account cascade: explicitly named account, else the sole configured
/// account, else the channel's `default_account`, else `"default"` when
/// no accounts are configured at all.
pub fn resolve_outbound_target(
    cfg: &TernConfig,
    req: OutboundRequest<'_>,
    mode: ResolveMode,
) -> Result<ResolvedTarget> {
    let channel_cfg = cfg.channels.get(req.channel);
    let account_id = select_account(req.channel, req.account_id, channel_cfg)?;

    // An empty `to` is as good as a missing one.
    let requested_to = req.to.filter(|t| !t.is_empty());
    let to = match (requested_to, mode) {
        (Some(to), _) => to.to_string(),
        (None, ResolveMode::Explicit) => return Err(Error::missing_target(req.channel)),
        (None, ResolveMode::Implicit) => channel_cfg
            .and_then(|c| c.accounts.get(&account_id))
            .and_then(|a| a.default_to.clone())
            .ok_or_else(|| Error::missing_target(req.channel))?,
    };

    Ok(ResolvedTarget {
        channel: req.channel.to_string(),
        account_id,
        to,
    })
}

fn select_account(
    channel: &str,
    requested: Option<&str>,
    channel_cfg: Option<&ChannelConfig>,
) -> Result<String> {
    let accounts = channel_cfg.map(|c| &c.accounts);

    if let Some(id) = requested {
        if let Some(accounts) = accounts
            && !accounts.is_empty()
            && !accounts.contains_key(id)
        {
            return Err(Error::unknown_account(channel, id));
        }
        return Ok(id.to_string());
    }

    let Some(accounts) = accounts.filter(|a| !a.is_empty()) else {
        return Ok("default".to_string());
    };

    if accounts.len() == 1
        && let Some(id) = accounts.keys().next()
    {
        return Ok(id.clone());
    }

    if let Some(default) = channel_cfg.and_then(|c| c.default_account.as_deref()) {
        if !accounts.contains_key(default) {
            return Err(Error::unknown_account(channel, default));
        }
        return Ok(default.to_string());
    }

    Err(Error::ambiguous_account(channel))
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml: &str) -> TernConfig {
        toml::from_str(toml).unwrap()
    }

    fn req<'a>(channel: &'a str, account_id: Option<&'a str>, to: Option<&'a str>) -> OutboundRequest<'a> {
        OutboundRequest {
            channel,
            account_id,
            to,
        }
    }

    #[test]
    fn explicit_mode_requires_to() {
        let cfg = config("[channels.telegram.accounts.bot1]\ndefault_to = \"ops\"\n");
        let err = resolve_outbound_target(&cfg, req("telegram", None, None), ResolveMode::Explicit)
            .unwrap_err();
        assert!(matches!(err, Error::MissingTarget { .. }));
    }

    #[test]
    fn explicit_mode_ignores_default_to_when_to_given() {
        let cfg = config("[channels.telegram.accounts.bot1]\ndefault_to = \"ops\"\n");
        let target =
            resolve_outbound_target(&cfg, req("telegram", None, Some("room-7")), ResolveMode::Explicit)
                .unwrap();
        assert_eq!(target.to, "room-7");
        assert_eq!(target.account_id, "bot1");
    }

    #[test]
    fn implicit_mode_falls_back_to_default_to() {
        let cfg = config("[channels.telegram.accounts.bot1]\ndefault_to = \"ops\"\n");
        let target =
            resolve_outbound_target(&cfg, req("telegram", None, None), ResolveMode::Implicit)
                .unwrap();
        assert_eq!(target.to, "ops");
    }

    #[test]
    fn empty_to_counts_as_missing() {
        let cfg = config("[channels.telegram.accounts.bot1]\n");
        let err = resolve_outbound_target(&cfg, req("telegram", None, Some("")), ResolveMode::Explicit)
            .unwrap_err();
        assert!(matches!(err, Error::MissingTarget { .. }));
    }

    #[test]
    fn implicit_mode_without_any_destination_errors() {
        let cfg = config("[channels.telegram.accounts.bot1]\n");
        let err = resolve_outbound_target(&cfg, req("telegram", None, None), ResolveMode::Implicit)
            .unwrap_err();
        assert!(matches!(err, Error::MissingTarget { .. }));
    }

    #[test]
    fn sole_account_is_selected() {
        let cfg = config("[channels.slack.accounts.main]\n");
        let target =
            resolve_outbound_target(&cfg, req("slack", None, Some("C123")), ResolveMode::Explicit)
                .unwrap();
        assert_eq!(target.account_id, "main");
    }

    #[test]
    fn default_account_breaks_ties() {
        let cfg = config(
            "[channels.slack]\ndefault_account = \"b\"\n[channels.slack.accounts.a]\n[channels.slack.accounts.b]\n",
        );
        let target =
            resolve_outbound_target(&cfg, req("slack", None, Some("C123")), ResolveMode::Explicit)
                .unwrap();
        assert_eq!(target.account_id, "b");
    }

    #[test]
    fn multiple_accounts_without_default_is_ambiguous() {
        let cfg = config("[channels.slack.accounts.a]\n[channels.slack.accounts.b]\n");
        let err = resolve_outbound_target(&cfg, req("slack", None, Some("C123")), ResolveMode::Explicit)
            .unwrap_err();
        assert!(matches!(err, Error::AmbiguousAccount { .. }));
    }

    #[test]
    fn named_account_must_exist_when_accounts_configured() {
        let cfg = config("[channels.slack.accounts.a]\n");
        let err = resolve_outbound_target(
            &cfg,
            req("slack", Some("ghost"), Some("C123")),
            ResolveMode::Explicit,
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownAccount { .. }));
    }

    #[test]
    fn unconfigured_channel_uses_default_account_id() {
        let cfg = TernConfig::default();
        let target =
            resolve_outbound_target(&cfg, req("matrix", None, Some("!room")), ResolveMode::Explicit)
                .unwrap();
        assert_eq!(target.account_id, "default");
        assert_eq!(target.channel, "matrix");
    }
}
