//! Root application component with routing and the auth context provider.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::require_auth::RequireAuth;
use crate::pages::{
    events::{EventCreatePage, EventDetailPage, EventEditPage, EventListPage},
    home::HomePage,
    login::LoginPage,
    people::{PeopleListPage, PersonDetailPage},
    photos::{PhotoDetailPage, PhotoListPage, PhotoUploadPage},
    profile::{ProfileDetailPage, ProfileEditPage, ProfileSettingsPage},
    register::RegisterPage,
};
use crate::state::auth::AuthState;
use crate::state::session;

/// Root application component.
///
/// Provides the auth signal, bridges gateway session changes into it, and
/// kicks off the one-time restore of a stored token.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    provide_context(auth);
    session::bind_auth_state(auth);
    session::restore_into(auth);

    view! {
        <Title text="FacialRecognition"/>

        <Router>
            <div class="app-container">
                <Header/>
                <main class="main-content">
                    <Routes fallback=|| view! { <Redirect path="/"/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                        <Route path=(StaticSegment("auth"), StaticSegment("register")) view=RegisterPage/>

                        <Route path=StaticSegment("photos") view=|| view! { <RequireAuth><PhotoListPage/></RequireAuth> }/>
                        <Route
                            path=(StaticSegment("photos"), StaticSegment("upload"))
                            view=|| view! { <RequireAuth><PhotoUploadPage/></RequireAuth> }
                        />
                        <Route
                            path=(StaticSegment("photos"), ParamSegment("id"))
                            view=|| view! { <RequireAuth><PhotoDetailPage/></RequireAuth> }
                        />

                        <Route path=StaticSegment("events") view=|| view! { <RequireAuth><EventListPage/></RequireAuth> }/>
                        <Route
                            path=(StaticSegment("events"), StaticSegment("new"))
                            view=|| view! { <RequireAuth><EventCreatePage/></RequireAuth> }
                        />
                        <Route
                            path=(StaticSegment("events"), ParamSegment("id"), StaticSegment("edit"))
                            view=|| view! { <RequireAuth><EventEditPage/></RequireAuth> }
                        />
                        <Route
                            path=(StaticSegment("events"), ParamSegment("id"))
                            view=|| view! { <RequireAuth><EventDetailPage/></RequireAuth> }
                        />

                        <Route path=StaticSegment("people") view=|| view! { <RequireAuth><PeopleListPage/></RequireAuth> }/>
                        <Route
                            path=(StaticSegment("people"), ParamSegment("id"))
                            view=|| view! { <RequireAuth><PersonDetailPage/></RequireAuth> }
                        />

                        <Route path=StaticSegment("profile") view=|| view! { <RequireAuth><ProfileDetailPage/></RequireAuth> }/>
                        <Route
                            path=(StaticSegment("profile"), StaticSegment("edit"))
                            view=|| view! { <RequireAuth><ProfileEditPage/></RequireAuth> }
                        />
                        <Route
                            path=(StaticSegment("profile"), StaticSegment("settings"))
                            view=|| view! { <RequireAuth><ProfileSettingsPage/></RequireAuth> }
                        />
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
