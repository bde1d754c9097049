//! User management: list, toggle role, delete.

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::net::types::Identity;
use crate::state::auth::AuthState;
use crate::state::cache::Remote;
use crate::util::browser::confirm;
use crate::util::remote::{Mutations, load_remote};

#[component]
pub fn ManageUsersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let mutations = Mutations::from_context();

    let users = load_remote(|| (), {
        let api = api.clone();
        move |()| {
            let api = api.clone();
            async move { api.admin_users().await }
        }
    });
    // Id of the row with a request in flight.
    let busy_row = RwSignal::new(None::<String>);

    let row = move |user: Identity| {
        let is_self = auth.with_untracked(|a| a.user.as_ref().is_some_and(|me| me.id == user.id));
        let next_role = user.role.toggled();
        let row_id = user.id.clone();
        let row_busy = move || busy_row.with(|b| b.as_deref() == Some(row_id.as_str()));

        let on_toggle = {
            let api = api.clone();
            let id = user.id.clone();
            let name = user.name.clone();
            move |_: leptos::ev::MouseEvent| {
                if !confirm(&format!("Change {name}'s role to {}?", next_role.label())) {
                    return;
                }
                busy_row.set(Some(id.clone()));
                let api = api.clone();
                let id = id.clone();
                mutations.run(
                    async move { api.update_user_role(&id, next_role).await },
                    "User role updated successfully!",
                    "Error updating user role",
                    move |_| busy_row.set(None),
                );
            }
        };
        let on_delete = {
            let api = api.clone();
            let id = user.id.clone();
            let name = user.name.clone();
            move |_: leptos::ev::MouseEvent| {
                if !confirm(&format!("Delete {name}? This cannot be undone.")) {
                    return;
                }
                busy_row.set(Some(id.clone()));
                let api = api.clone();
                let id = id.clone();
                mutations.run(
                    async move { api.delete_user(&id).await },
                    "User deleted successfully!",
                    "Error deleting user",
                    move |_| busy_row.set(None),
                );
            }
        };
        let row_busy_delete = row_busy.clone();

        view! {
            <tr>
                <td>
                    {user.avatar.map(|src| view! { <img class="admin-table__avatar" src=src alt=""/> })}
                    {user.name}
                </td>
                <td>{user.email}</td>
                <td>
                    <span class=format!("role-badge role-badge--{}", user.role.label().to_lowercase())>
                        {user.role.label()}
                    </span>
                </td>
                <td class="admin-table__actions">
                    <button on:click=on_toggle disabled=move || is_self || row_busy()>
                        {format!("Make {}", next_role.label())}
                    </button>
                    <button class="danger" on:click=on_delete disabled=move || is_self || row_busy_delete()>
                        "Delete"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        {move || match users.get() {
            Remote::Loading => view! { <p class="page-loading">"Loading users..."</p> }.into_any(),
            Remote::Failed(_) => view! { <p class="page-error">"Error loading users."</p> }.into_any(),
            Remote::Ready(list) => {
                let row = row.clone();
                view! {
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>{list.into_iter().map(row).collect_view()}</tbody>
                    </table>
                }
                    .into_any()
            }
        }}
    }
}
