//! Builds the WhatsApp order message.

use crate::catalog::Plan;
use crate::validator::ValidOrder;

const TITLE: &str = "*PESANAN PTERODACTYL HOSTING*";
const CLOSING: &str = "🚀 Mohon proses pesanan hosting ini. Terima kasih!";

/// Compose the order summary for `plan`.
///
/// Blocks are separated by one blank line. Server name, game and notes only
/// appear when the customer filled them in; notes are copied verbatim.
pub fn compose(plan: &Plan, order: &ValidOrder) -> String {
    let mut blocks: Vec<Vec<String>> = Vec::new();

    blocks.push(vec![TITLE.to_string()]);

    blocks.push(vec![
        format!("🦕 *Paket:* {}", plan.name),
        format!("💰 *Harga:* {}", plan.price_label()),
    ]);

    let mut customer = vec![
        "👤 *Data Pelanggan:*".to_string(),
        format!("• Nama: {}", order.name),
        format!("• Email: {}", order.email),
        format!("• WhatsApp: {}", order.contact),
    ];
    if let Some(server) = &order.server_name {
        customer.push(format!("• Nama Server: {}", server));
    }
    if let Some(game) = order.game {
        customer.push(format!("• Game: {}", game.display_name()));
    }
    blocks.push(customer);

    let mut features = vec!["📋 *Fitur Paket:*".to_string()];
    features.extend(plan.features.iter().map(|f| format!("✓ {}", f)));
    blocks.push(features);

    if let Some(notes) = &order.notes {
        blocks.push(vec!["📝 *Catatan Tambahan:*".to_string(), notes.clone()]);
    }

    blocks.push(vec![CLOSING.to_string()]);

    blocks
        .iter()
        .map(|b| b.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, GameType, PlanId};

    fn order() -> ValidOrder {
        ValidOrder {
            name: "Budi".into(),
            email: "budi@mail.com".into(),
            contact: "081234567890".into(),
            server_name: None,
            game: None,
            notes: None,
        }
    }

    #[test]
    fn minimal_message_layout() {
        let plan = Catalog::builtin().get(PlanId::Basic);
        let expected = "*PESANAN PTERODACTYL HOSTING*\n\
\n\
🦕 *Paket:* Basic Plan\n\
💰 *Harga:* Rp 1.000/bulan\n\
\n\
👤 *Data Pelanggan:*\n\
• Nama: Budi\n\
• Email: budi@mail.com\n\
• WhatsApp: 081234567890\n\
\n\
📋 *Fitur Paket:*\n\
✓ 1GB RAM\n\
✓ 100% CPU\n\
✓ Unlimited Bandwidth\n\
✓ DDoS Protection\n\
✓ 24/7 Support\n\
\n\
🚀 Mohon proses pesanan hosting ini. Terima kasih!";
        assert_eq!(compose(plan, &order()), expected);
    }

    #[test]
    fn optional_blocks_absent_when_not_supplied() {
        let msg = compose(Catalog::builtin().get(PlanId::Pro), &order());
        assert!(!msg.contains("Nama Server"));
        assert!(!msg.contains("Game:"));
        assert!(!msg.contains("Catatan Tambahan"));
        assert!(!msg.contains("\n\n\n"));
    }

    #[test]
    fn optional_blocks_present_when_supplied() {
        let mut o = order();
        o.server_name = Some("survival-1".into());
        o.game = Some(GameType::Minecraft);
        o.notes = Some("Tolong <b>cepat</b>\nterima kasih".into());
        let msg = compose(Catalog::builtin().get(PlanId::Premium), &o);
        assert!(msg.contains("• WhatsApp: 081234567890\n• Nama Server: survival-1\n• Game: Minecraft\n\n📋"));
        assert!(msg.contains("📝 *Catatan Tambahan:*\nTolong <b>cepat</b>\nterima kasih\n\n🚀"));
    }

    #[test]
    fn features_appear_once_in_catalog_order() {
        let plan = Catalog::builtin().get(PlanId::Premium);
        let msg = compose(plan, &order());
        let mut last = 0;
        for feature in &plan.features {
            let line = format!("✓ {}\n", feature);
            assert_eq!(msg.matches(&line).count(), 1, "{}", feature);
            let pos = msg.find(&line).unwrap();
            assert!(pos >= last);
            last = pos;
        }
    }

    #[test]
    fn compose_is_deterministic() {
        let plan = Catalog::builtin().get(PlanId::Pro);
        assert_eq!(compose(plan, &order()), compose(plan, &order()));
    }
}
