//! Landing page: hero, feature boxes, call to action and the jurisdiction search.

use super::available_jurisdictions::AvailableJurisdictions;
use super::icon::{Icon, IconKind};
use super::info_boxes::{BareBox, IconBox};
use super::jurisdiction_search::{JurisdictionSearch, SEARCH_SECTION_ID};
use crate::dom;
use crate::state::{AppState, Services};
use dioxus::prelude::*;
use permit_core::view::CallToAction;

const CONTAINER_STYLE: &str = "max-width: 1024px; margin: 0 auto; padding: 64px 32px;";

#[component]
pub fn LandingScreen() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let t = |key: &str| services.t(key);

    let session = state.session.read().clone();
    let cta = CallToAction::for_user(session.current_user.as_ref());
    let location = t(cta.location_key);
    let go_to = services
        .translations
        .t_with("landing.goTo", &[("location", location.as_str())]);
    let cta_href = cta.href;

    let contact_email = services
        .site_config
        .contact_email
        .clone()
        .unwrap_or_else(|| t("site.contactEmail"));
    let mailto = format!("mailto:{}", contact_email);
    let template_href = services.site_config.template_path().unwrap_or_default();

    let who_for = services.translations.t_list("landing.whoFor");
    let apply_needs = services.translations.t_list("landing.applyNeeds");

    let title = t("landing.title");
    let intro = t("landing.intro");
    let easily_upload = t("landing.easilyUpload");
    let best_practices = t("landing.bestPractices");
    let easy_to_follow = t("landing.easyToFollow");
    let apply_for_rebates = t("landing.applyForRebates");
    let access_explanation = t("landing.accessExplanation");
    let continue_prefix = t("landing.continuePrefix");
    let continue_login = t("landing.continueLogin");
    let continue_suffix = t("landing.continueSuffix");
    let who_for_title = t("landing.whoForTitle");
    let i_need_prefix = t("landing.iNeedPrefix");
    let i_need = t("landing.iNeed");
    let i_need_suffix = t("landing.iNeedSuffix");
    let what_to_apply = t("landing.whatToApply");
    let during_application = t("landing.duringApplication");
    let information_ready = t("landing.informationReady");
    let other_ways = t("landing.otherWays");
    let other_ways_desc = t("landing.otherWaysDesc");
    let left = t("landing.additionalContent.left");
    let view_template = t("landing.additionalContent.viewTemplate");
    let mid = t("landing.additionalContent.mid");
    let mid_button = t("landing.additionalContent.midButton");
    let end = t("landing.additionalContent.end");
    let end_button = t("landing.additionalContent.endButton");
    let contact_us = t("landing.contactUs");

    rsx! {
        div {
            style: "display: flex; flex-direction: column; width: 100%; background: white; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            // Hero
            div {
                style: "display: flex; align-items: center; min-height: 364px; background: #1F4E79;",
                div {
                    style: "max-width: 1024px; width: 100%; margin: 0 auto; padding: 0 32px;",
                    div {
                        style: "display: flex; flex-direction: column; gap: 8px; max-width: 550px; padding: 32px; border-radius: 2px; border-left: 8px solid #FCBA19; background: rgba(0, 0, 0, 0.35); color: white;",
                        p { style: "margin: 0; font-size: 24px; font-weight: bold;", "{title}" }
                        p { style: "margin: 0; font-size: 18px; font-weight: 300;", "{intro}" }
                    }
                }
            }

            div {
                style: CONTAINER_STYLE,
                section {
                    style: "display: flex; flex-direction: column; gap: 80px;",
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 24px;",
                        IconBox { icon: IconKind::ClipboardText, "{easily_upload}" }
                        IconBox { icon: IconKind::CheckCircle, "{best_practices}" }
                        IconBox { icon: IconKind::FileArrowUp, "{easy_to_follow}" }
                    }

                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 40px; align-items: stretch;",
                        section {
                            style: "flex: 1; min-width: 280px; display: flex; flex-direction: column; gap: 24px; padding: 32px; border-radius: 8px; background: #2D5CA8; color: white;",
                            h2 { style: "margin: 0;", "{apply_for_rebates}" }
                            p { style: "margin: 0;", "{access_explanation}" }
                            div { style: "width: 36px; border-bottom: 4px solid #2E8540;" }
                            a {
                                href: cta_href,
                                style: "align-self: flex-start; padding: 8px 16px; border-radius: 4px; background: white; color: #2D5CA8; font-weight: bold; text-decoration: none;",
                                "{go_to} "
                                Icon { kind: IconKind::CaretRight }
                            }
                            p {
                                style: "margin: 0;",
                                "{continue_prefix} "
                                a { href: "/login", style: "color: white;", "{continue_login}" }
                                " {continue_suffix}"
                            }
                        }
                        section {
                            style: "flex: 1; min-width: 280px; display: flex; flex-direction: column; gap: 16px;",
                            h2 { style: "margin: 0; color: #1A3A5F;", "{who_for_title}" }
                            ul {
                                style: "margin: 0; padding-left: 16px;",
                                for item in who_for {
                                    li { key: "{item}", "{item}" }
                                }
                            }
                            p {
                                style: "margin: 0;",
                                "{i_need_prefix}"
                                button {
                                    r#type: "button",
                                    style: "padding: 0; border: none; background: none; color: #2D5CA8; text-decoration: underline; cursor: pointer;",
                                    onclick: move |_| dom::scroll_into_view(SEARCH_SECTION_ID),
                                    "{i_need} "
                                    Icon { kind: IconKind::ArrowSquareOut }
                                }
                                "{i_need_suffix}"
                            }
                        }
                    }
                }
            }

            // Jurisdiction search
            div {
                style: "background: #F2F2F2;",
                div {
                    style: "max-width: 1024px; margin: 0 auto; padding: 40px 32px; display: flex; flex-direction: column; gap: 24px;",
                    JurisdictionSearch {}
                    AvailableJurisdictions {}
                }
            }

            div {
                style: "background: #F2F2F2;",
                div {
                    style: "max-width: 1024px; margin: 0 auto; padding: 40px 32px;",
                    h2 { style: "color: #1A3A5F;", "{what_to_apply}" }
                    p { "{during_application}" }
                    ul {
                        style: "padding-left: 16px;",
                        for item in apply_needs {
                            li { key: "{item}", "{item}" }
                        }
                    }
                    p { "{information_ready}" }
                }
            }

            div {
                style: CONTAINER_STYLE,
                h2 { style: "font-size: 16px; color: #1A3A5F;", "{other_ways}" }
                p { "{other_ways_desc}" }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 24px; margin-top: 32px;",
                    BareBox {
                        n: "1".to_string(),
                        "{left}"
                        br {}
                        if !template_href.is_empty() {
                            a { href: "{template_href}", "{view_template}" }
                        }
                    }
                    BareBox {
                        n: "2".to_string(),
                        "{mid}"
                        br {}
                        a { href: "/", "{mid_button}" }
                    }
                    BareBox {
                        n: "3".to_string(),
                        "{end}"
                        br {}
                        a { href: "{mailto}", "{end_button}" }
                    }
                }
                p {
                    style: "margin-top: 32px;",
                    a { href: "{mailto}", "{contact_us}: {contact_email}" }
                }
            }
        }
    }
}
