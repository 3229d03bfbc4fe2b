use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::{AuthHeaders, ChargeRequest};
use crate::ports::AccountLookupPort;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Client-side checks run before a charge is submitted.
///
/// Rules are evaluated in a fixed order and the first violation is returned:
///
/// 1. `value` is present
/// 2. `value` is greater than zero
/// 3. `webhook_url`, when present, has no whitespace or control characters
///    and parses as a URL with a host
/// 4. for every split rule, in order: its `value` is greater than zero, its
///    `account_id` is not blank, and the account exists (one lookup per rule)
/// 5. the split values add up to at most `value`
///
/// Account lookup failures (remote errors, transport errors) are returned
/// unchanged rather than reported as an invalid request.
pub struct ChargeValidator<A: AccountLookupPort> {
    accounts: Arc<A>,
}

impl<A: AccountLookupPort> ChargeValidator<A> {
    pub fn new(accounts: Arc<A>) -> Self {
        Self { accounts }
    }

    pub async fn validate(&self, headers: &AuthHeaders, request: &ChargeRequest) -> DomainResult<()> {
        let value = request
            .value
            .ok_or_else(|| invalid("value is required".to_string()))?;

        if value <= 0 {
            return Err(invalid(format!("value must be greater than 0, got {}", value)));
        }

        if let Some(webhook_url) = &request.webhook_url {
            check_webhook_url(webhook_url)?;
        }

        let rules = request.split_rules();
        if rules.is_empty() {
            return Ok(());
        }

        // i64 values summed in i128, cannot overflow
        let mut split_total: i128 = 0;

        for (index, rule) in rules.iter().enumerate() {
            let rule_value = match rule.value {
                Some(v) if v > 0 => v,
                Some(v) => {
                    return Err(invalid(format!(
                        "split_rules[{}].value must be greater than 0, got {}",
                        index, v
                    )));
                }
                None => {
                    return Err(invalid(format!("split_rules[{}].value is required", index)));
                }
            };

            let account_id = match rule.account_id.as_deref() {
                Some(id) if !id.trim().is_empty() => id,
                _ => {
                    return Err(invalid(format!(
                        "split_rules[{}].account_id is required",
                        index
                    )));
                }
            };

            if !self.accounts.exists_by_account_id(headers, account_id).await? {
                return Err(invalid(format!(
                    "split_rules[{}].account_id {} does not exist",
                    index, account_id
                )));
            }

            split_total += i128::from(rule_value);
        }

        if split_total > i128::from(value) {
            return Err(invalid(format!(
                "split rules total {} exceeds charge value {}",
                split_total, value
            )));
        }

        debug!(
            "Charge request valid: value={}, split_rules={}",
            value,
            rules.len()
        );
        Ok(())
    }
}

/// The URL is sent exactly as given, so it must already be in the form the
/// parser would produce: no whitespace or control characters, and a host.
fn check_webhook_url(webhook_url: &str) -> DomainResult<()> {
    if webhook_url
        .chars()
        .any(|c| c.is_ascii_whitespace() || c.is_control())
    {
        return Err(invalid(format!(
            "webhook_url must not contain whitespace or control characters: {:?}",
            webhook_url
        )));
    }

    let parsed = Url::parse(webhook_url).map_err(|e| {
        invalid(format!("webhook_url is not a valid URL ({}): {}", e, webhook_url))
    })?;

    if parsed.host().is_none() {
        return Err(invalid(format!("webhook_url has no host: {}", webhook_url)));
    }

    Ok(())
}

fn invalid(reason: String) -> DomainError {
    DomainError::InvalidChargeRequest(reason)
}
