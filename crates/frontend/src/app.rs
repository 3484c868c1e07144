use crate::dashboards::SavingsAnalyticsDashboard;
use crate::system::auth::{restore_session, Session};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

#[derive(Clone, Debug, PartialEq)]
enum AuthState {
    Restoring,
    SignedIn(Session),
    SignedOut,
}

#[component]
pub fn App() -> impl IntoView {
    let (auth, set_auth) = signal(AuthState::Restoring);

    spawn_local(async move {
        match restore_session().await {
            Some(session) => {
                log::info!("Signed in as {}", session.user.username);
                set_auth.set(AuthState::SignedIn(session));
            }
            None => {
                log::info!("No valid session, sign-in required");
                set_auth.set(AuthState::SignedOut);
            }
        }
    });

    move || match auth.get() {
        AuthState::Restoring => view! {
            <div class="app-loading">
                <Spinner />
            </div>
        }
        .into_any(),
        AuthState::SignedIn(session) => view! { <SavingsAnalyticsDashboard session=session /> }.into_any(),
        AuthState::SignedOut => view! {
            <div class="app-signed-out">
                <h2>"Sign in required"</h2>
                <p>"Your session has expired. Sign in again to view group analytics."</p>
            </div>
        }
        .into_any(),
    }
}
