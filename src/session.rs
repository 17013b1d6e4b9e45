//! Per-run user state shared across the desktop and the hosted apps:
//! wallet credits, purchased products, behavior settings, and the mouse
//! capture flag the runner flushes to the input driver.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased,
    AlreadyOwned,
    InsufficientFunds,
}

/// Toggles surfaced in the Settings app.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    /// When set, restoring a minimized window also raises it. Off by
    /// default: restore only makes the window visible again in place.
    pub raise_on_restore: bool,
}

#[derive(Debug)]
pub struct Session {
    wallet: u32,
    owned: BTreeSet<String>,
    settings: Settings,
    mouse_capture_enabled: bool,
    mouse_capture_changed: bool,
}

impl Session {
    pub fn new(wallet: u32) -> Self {
        Self {
            wallet,
            owned: BTreeSet::new(),
            settings: Settings::default(),
            mouse_capture_enabled: true,
            mouse_capture_changed: false,
        }
    }

    pub fn wallet(&self) -> u32 {
        self.wallet
    }

    pub fn deposit(&mut self, amount: u32) {
        self.wallet = self.wallet.saturating_add(amount);
    }

    pub fn owned(&self) -> &BTreeSet<String> {
        &self.owned
    }

    pub fn owns(&self, product: &str) -> bool {
        self.owned.contains(product)
    }

    /// Grant a product without charging for it (startup flags, rewards).
    pub fn grant(&mut self, product: &str) {
        self.owned.insert(product.to_string());
    }

    pub fn try_purchase(&mut self, product: &str, price: u32) -> PurchaseOutcome {
        if self.owned.contains(product) {
            return PurchaseOutcome::AlreadyOwned;
        }
        if self.wallet < price {
            return PurchaseOutcome::InsufficientFunds;
        }
        self.wallet -= price;
        self.owned.insert(product.to_string());
        PurchaseOutcome::Purchased
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn mouse_capture_enabled(&self) -> bool {
        self.mouse_capture_enabled
    }

    /// Flip the capture flag. The change is latched so the runner can flush
    /// it to the input driver exactly once per toggle.
    pub fn set_mouse_capture_enabled(&mut self, enabled: bool) {
        if self.mouse_capture_enabled != enabled {
            self.mouse_capture_enabled = enabled;
            self.mouse_capture_changed = true;
        }
    }

    pub fn take_mouse_capture_change(&mut self) -> Option<bool> {
        if self.mouse_capture_changed {
            self.mouse_capture_changed = false;
            Some(self.mouse_capture_enabled)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_deducts_once() {
        let mut session = Session::new(200);
        assert_eq!(session.try_purchase("VPN", 150), PurchaseOutcome::Purchased);
        assert_eq!(session.wallet(), 50);
        assert_eq!(
            session.try_purchase("VPN", 150),
            PurchaseOutcome::AlreadyOwned
        );
        assert_eq!(session.wallet(), 50);
        assert_eq!(
            session.try_purchase("Firewall", 300),
            PurchaseOutcome::InsufficientFunds
        );
        assert!(!session.owns("Firewall"));
    }

    #[test]
    fn mouse_capture_change_flow() {
        let mut session = Session::new(0);
        assert!(session.mouse_capture_enabled());
        // Setting the same value shouldn't latch a change.
        session.set_mouse_capture_enabled(true);
        assert!(session.take_mouse_capture_change().is_none());
        session.set_mouse_capture_enabled(false);
        assert_eq!(session.take_mouse_capture_change(), Some(false));
        // Consumed.
        assert!(session.take_mouse_capture_change().is_none());
    }
}
