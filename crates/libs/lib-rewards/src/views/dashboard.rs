//! # Dashboard View Model
//!
//! One refresh cycle fetches the balance, then the ads, then generates a new
//! referral code. Each step is applied as soon as it succeeds; the first failure
//! ends the cycle and leaves whatever was already applied on screen.

use rand::Rng;
use shared::{format_usdt, Ad};

use crate::error::Result;
use crate::referral::ReferralCode;
use crate::service::RewardsApi;

pub const WATCH_AD_LABEL: &str = "Watch Ad";
pub const AD_LINK_TARGET: &str = "_blank";
pub const AD_LINK_REL: &str = "noopener noreferrer";

/// A single step of a refresh cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardUpdate {
    Balance(f64),
    Ads(Vec<Ad>),
    Referral(ReferralCode),
}

/// Run one refresh cycle for `user`, handing each successful step to `apply`.
///
/// There is no guard against out-of-order completion: if two cycles overlap,
/// whichever resolves last wins.
pub async fn refresh<A, R, F>(api: &A, user: &str, rng: &mut R, mut apply: F) -> Result<()>
where
    A: RewardsApi + ?Sized,
    R: Rng + ?Sized,
    F: FnMut(DashboardUpdate),
{
    let balance = api.balance(user).await?;
    apply(DashboardUpdate::Balance(balance.balance));

    let ads = api.ads().await?;
    apply(DashboardUpdate::Ads(ads));

    apply(DashboardUpdate::Referral(ReferralCode::generate(user, rng)));
    Ok(())
}

/// External link rendered for one ad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdLink {
    pub key: String,
    pub title: String,
    pub href: String,
    pub label: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
}

impl From<&Ad> for AdLink {
    fn from(ad: &Ad) -> Self {
        Self {
            key: ad.id.clone(),
            title: ad.title.clone(),
            href: ad.url.clone(),
            label: WATCH_AD_LABEL,
            target: AD_LINK_TARGET,
            rel: AD_LINK_REL,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub balance: f64,
    pub referral_code: Option<ReferralCode>,
    pub ads: Vec<Ad>,
}

impl DashboardState {
    pub fn apply(&mut self, update: DashboardUpdate) {
        match update {
            DashboardUpdate::Balance(balance) => self.balance = balance,
            DashboardUpdate::Ads(ads) => self.ads = ads,
            DashboardUpdate::Referral(code) => self.referral_code = Some(code),
        }
    }

    pub fn balance_line(&self) -> String {
        format!("Balance: {}", format_usdt(self.balance))
    }

    pub fn referral_line(&self) -> String {
        let code = self.referral_code.as_ref().map(ReferralCode::as_str).unwrap_or_default();
        format!("Referral Code: {}", code)
    }

    pub fn ad_links(&self) -> Vec<AdLink> {
        self.ads.iter().map(AdLink::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::init_tracing;
    use crate::views::fake::FakeApi;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ad_a() -> Ad {
        Ad {
            id: "1".to_string(),
            title: "Ad A".to_string(),
            url: "http://x".to_string(),
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn test_initial_render() {
        let state = DashboardState::default();
        assert_eq!(state.balance_line(), "Balance: 0 USDT");
        assert_eq!(state.referral_line(), "Referral Code: ");
        assert!(state.ad_links().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_renders_balance_and_ads() {
        init_tracing();
        let api = FakeApi {
            balance: Some(42.5),
            ads: Some(vec![ad_a()]),
            ..Default::default()
        };
        let mut state = DashboardState::default();

        refresh(&api, "a@b.com", &mut rng(), |u| state.apply(u)).await.unwrap();

        assert_eq!(state.balance_line(), "Balance: 42.5 USDT");
        assert_eq!(api.calls(), vec!["balance a@b.com", "ads"]);

        let links = state.ad_links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].title, "Ad A");
        assert_eq!(links[0].label, "Watch Ad");
        assert_eq!(links[0].href, "http://x");
        assert_eq!(links[0].target, "_blank");

        let code = state.referral_code.as_ref().unwrap();
        let (email, _) = ReferralCode::parse(code.as_str()).unwrap();
        assert_eq!(email, "a@b.com");
        assert!(state.referral_line().starts_with("Referral Code: a@b.com-REF"));
    }

    #[tokio::test]
    async fn test_ads_failure_keeps_balance() {
        init_tracing();
        let api = FakeApi {
            balance: Some(3.0),
            ads: None,
            ..Default::default()
        };
        let mut state = DashboardState {
            ads: vec![ad_a()],
            ..Default::default()
        };

        let result = refresh(&api, "a@b.com", &mut rng(), |u| state.apply(u)).await;

        assert!(result.is_err());
        assert_eq!(state.balance, 3.0);
        assert_eq!(state.ads, vec![ad_a()]);
        assert_eq!(state.referral_code, None);
    }

    #[tokio::test]
    async fn test_balance_failure_skips_remaining_steps() {
        init_tracing();
        let api = FakeApi {
            balance: None,
            ads: Some(vec![ad_a()]),
            ..Default::default()
        };
        let mut state = DashboardState::default();

        assert!(refresh(&api, "a@b.com", &mut rng(), |u| state.apply(u)).await.is_err());
        assert_eq!(api.calls(), vec!["balance a@b.com"]);
        assert_eq!(state, DashboardState::default());
    }

    #[tokio::test]
    async fn test_each_refresh_regenerates_referral_code() {
        let api = FakeApi {
            balance: Some(1.0),
            ads: Some(vec![]),
            ..Default::default()
        };
        let mut state = DashboardState::default();
        let mut rng = StdRng::seed_from_u64(9);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..20 {
            refresh(&api, "a@b.com", &mut rng, |u| state.apply(u)).await.unwrap();
            seen.insert(state.referral_line());
        }
        assert!(seen.len() > 1);
    }

    #[tokio::test]
    async fn test_updates_arrive_in_order() {
        let api = FakeApi {
            balance: Some(5.0),
            ads: Some(vec![ad_a()]),
            ..Default::default()
        };
        let mut updates = Vec::new();

        refresh(&api, "a@b.com", &mut rng(), |u| updates.push(u)).await.unwrap();

        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0], DashboardUpdate::Balance(5.0));
        assert_eq!(updates[1], DashboardUpdate::Ads(vec![ad_a()]));
        assert!(matches!(updates[2], DashboardUpdate::Referral(_)));
    }
}
