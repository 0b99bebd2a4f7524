//! Coupon dialog body, loaded into the header dialog on first open.

use time::OffsetDateTime;
use vitrine_cms::Coupon;

use super::escape;

/// Every coupon, classified against `now`. Expired coupons cannot be copied.
pub fn coupon_list(coupons: &[Coupon], now: OffsetDateTime) -> String {
    if coupons.is_empty() {
        return r#"<p class="muted center">Nenhum cupom disponível no momento.</p>"#.to_string();
    }

    let items: String = coupons.iter().map(|c| coupon_item(c, now)).collect();
    format!(r#"<div class="coupon-list">{items}</div>"#)
}

pub fn coupons_error(message: &str) -> String {
    let message = if message.is_empty() {
        "Erro desconhecido"
    } else {
        message
    };
    format!(
        r#"<p class="text-error center">Erro ao carregar cupons: {}</p>"#,
        escape(message)
    )
}

fn coupon_item(coupon: &Coupon, now: OffsetDateTime) -> String {
    let expired = coupon.status_at(now).is_expired();
    let code = escape(&coupon.code);
    let date = escape(&coupon.display_expiration());

    let (button, expiry, modifier) = if expired {
        (
            format!(r#"<button type="button" class="btn" data-copy="{code}" data-expired="true" disabled>Expirado</button>"#),
            format!(r#"<span class="alert-icon text-error" aria-hidden="true">&#9888;</span><span class="text-error">Expirado em: {date}</span>"#),
            " expired",
        )
    } else {
        (
            format!(r#"<button type="button" class="btn" data-copy="{code}" data-expired="false">Copiar</button>"#),
            format!("<span>Expira em: {date}</span>"),
            "",
        )
    };

    format!(
        r#"<div class="coupon{modifier}" data-coupon-id="{id}">
    <div class="coupon-row">
        <div class="coupon-text">
            <span class="muted small">{label}</span>
            <span class="coupon-code">{code}</span>
        </div>
        {button}
    </div>
    <div class="coupon-expiry muted small">{expiry}</div>
    <div class="alert" data-role="alert" role="status" hidden>
        <h5 class="alert-title">Aviso</h5>
        <p class="alert-description" data-role="alert-message"></p>
    </div>
</div>"#,
        id = escape(&coupon.id),
        label = escape(&coupon.label),
    )
}
