//! Read-only preview of the prescription letterhead.
//!
//! A pure projection of the template record plus an optional signature
//! image: no mutation, no local state. Fixed literal placeholders stand in
//! for empty fields so the mock-up always shows a complete letterhead, while
//! presence-conditional lines (room, city, mobile, PTR/S2 numbers, clinic
//! hours) disappear entirely when unset. Color values are applied as given;
//! a malformed color string simply falls back to the browser default.

use yew::prelude::*;

use common::model::template::ResetaTemplate;

#[derive(Properties, PartialEq, Clone)]
pub struct ResetaPreviewProps {
    pub template: ResetaTemplate,
    /// Signature image reference (URL or data URL), composited over the
    /// paper color above the footer identity line.
    #[prop_or_default]
    pub signature: Option<AttrValue>,
}

pub struct ResetaPreview;

impl Component for ResetaPreview {
    type Message = ();
    type Properties = ResetaPreviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ResetaPreview
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let template = &props.template;
        html! {
            <div class="reseta-paper" style={format!("background: {};", template.paper_color)}>
                { build_header(template) }
                { build_contact_block(template) }
                { build_hours_block(template) }
                { build_body(template) }
                { build_footer(template, props.signature.clone()) }
            </div>
        }
    }
}

fn build_header(template: &ResetaTemplate) -> Html {
    html! {
        <div class="reseta-header">
            <div class="clinic-name" style={format!("color: {};", template.header_color)}>
                { template.clinic_name_display() }
            </div>
            <div class="doctor-line">{ template.doctor_line() }</div>
            <div class="specialty-line">{ template.specialty_display() }</div>
        </div>
    }
}

/// Two columns: address lines on the left, phone/mobile/email on the right.
/// Room, city and mobile rows appear only when set.
fn build_contact_block(template: &ResetaTemplate) -> Html {
    html! {
        <div class="reseta-contact">
            <div class="contact-column">
                { optional_line(template.clinic_room.as_deref()) }
                <div>{ template.clinic_address_display() }</div>
                { optional_line(template.clinic_city.as_deref()) }
                <div>{ &template.clinic_country }</div>
            </div>
            <div class="contact-column">
                <div>{ format!("Tel: {}", template.phone_display()) }</div>
                {
                    match template.mobile.as_deref().filter(|m| !m.is_empty()) {
                        Some(mobile) => html! { <div>{ format!("Mobile: {}", mobile) }</div> },
                        None => html! {},
                    }
                }
                <div>{ format!("Email: {}", template.email_display()) }</div>
            </div>
        </div>
    }
}

/// Omitted entirely, heading included, unless at least one day has a
/// non-empty hours value.
fn build_hours_block(template: &ResetaTemplate) -> Html {
    let lines = template.hours_lines();
    if lines.is_empty() {
        return html! {};
    }
    html! {
        <div class="reseta-hours">
            <div class="hours-heading">{ "Clinic Hours" }</div>
            {
                lines
                    .into_iter()
                    .map(|(day, hours)| {
                        html! {
                            <div class="hours-line" key={day.label()}>
                                { format!("{}: {}", day.label(), hours) }
                            </div>
                        }
                    })
                    .collect::<Html>()
            }
        </div>
    }
}

/// The ℞ glyph (accent-colored, only when enabled) and the fixed-height
/// area where prescription content would go.
fn build_body(template: &ResetaTemplate) -> Html {
    html! {
        <div class="reseta-body">
            {
                if template.show_rx_symbol {
                    html! {
                        <div class="rx-symbol" style={format!("color: {};", template.accent_color)}>
                            { "℞" }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="body-placeholder"></div>
        </div>
    }
}

fn build_footer(template: &ResetaTemplate, signature: Option<AttrValue>) -> Html {
    html! {
        <div class="reseta-footer">
            {
                match signature {
                    Some(src) => html! {
                        <img class="signature-image" src={src} alt="Signature" />
                    },
                    None => html! {},
                }
            }
            <div class="footer-identity">{ template.doctor_identity() }</div>
            <div class="footer-license">
                { format!("License No. {}", template.license_no_display()) }
            </div>
            { optional_labeled_line("PTR No.", template.ptr_no.as_deref()) }
            { optional_labeled_line("S2 No.", template.s2_license_no.as_deref()) }
        </div>
    }
}

fn optional_line(value: Option<&str>) -> Html {
    match value.filter(|v| !v.is_empty()) {
        Some(text) => html! { <div>{ text }</div> },
        None => html! {},
    }
}

fn optional_labeled_line(label: &str, value: Option<&str>) -> Html {
    match value.filter(|v| !v.is_empty()) {
        Some(text) => html! { <div class="footer-license">{ format!("{} {}", label, text) }</div> },
        None => html! {},
    }
}
