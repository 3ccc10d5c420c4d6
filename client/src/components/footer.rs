//! Site footer with brand blurb, link columns, and copyright line.

use leptos::prelude::*;

const LINK_COLUMNS: [(&str, [(&str, &str); 4]); 3] = [
    (
        "Features",
        [
            ("Facial Recognition", "/features/facial-recognition"),
            ("Photo Sharing", "/features/photo-sharing"),
            ("Event Management", "/features/events"),
            ("Security", "/features/security"),
        ],
    ),
    (
        "Company",
        [("About Us", "/about"), ("Pricing", "/pricing"), ("Contact", "/contact"), ("Blog", "/blog")],
    ),
    (
        "Legal",
        [
            ("Terms of Service", "/terms"),
            ("Privacy Policy", "/privacy"),
            ("Cookie Policy", "/cookies"),
            ("GDPR Compliance", "/gdpr"),
        ],
    ),
];

fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

fn copyright_line(year: Option<u32>) -> String {
    match year {
        Some(year) => format!("© {year} FacialRecognition. All rights reserved."),
        None => "© FacialRecognition. All rights reserved.".to_owned(),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-brand">
                        <h2>"FacialRecognition"</h2>
                        <p>"Powerful facial recognition for photo management"</p>
                    </div>
                    <div class="footer-links">
                        {LINK_COLUMNS
                            .iter()
                            .map(|(heading, links)| {
                                view! {
                                    <div class="footer-column">
                                        <h3>{*heading}</h3>
                                        <ul>
                                            {links
                                                .iter()
                                                .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="footer-bottom">
                    <div class="copyright">{copyright_line(current_year())}</div>
                </div>
            </div>
        </footer>
    }
}
