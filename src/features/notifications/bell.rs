use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;

use crate::core::models::Notification;
use crate::features::notifications::services;

const POLL_INTERVAL_MS: u32 = 30_000;

/// Bell icon with an unread badge and a dropdown of notifications.
///
/// The unread count is polled on a fixed interval; the interval handle is
/// dropped on cleanup so navigating away stops the timer.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let (unread, set_unread) = signal(0u32);
    let (open, set_open) = signal(false);
    let (notifications, set_notifications) = signal(Vec::<Notification>::new());

    let poll_count = move || {
        spawn_local(async move {
            match services::unread_count().await {
                Ok(count) => set_unread.set(count),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch unread count: {}", e).into(),
                    );
                }
            }
        });
    };
    poll_count();
    // The interval handle is not Send, but cleanup callbacks must be; the
    // wrapper is fine because cleanup runs on the thread that mounted us.
    let poll = SendWrapper::new(Interval::new(POLL_INTERVAL_MS, poll_count));
    on_cleanup(move || drop(poll.take()));

    let fetch_list = move || {
        spawn_local(async move {
            match services::list().await {
                Ok(list) => set_notifications.set(list),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch notifications: {}", e).into(),
                    );
                }
            }
        });
    };

    let toggle = move |_| {
        if !open.get_untracked() {
            fetch_list();
        }
        set_open.update(|o| *o = !*o);
    };

    let mark_one = move |notification_id: i64| {
        spawn_local(async move {
            if let Err(e) = services::mark_read(notification_id).await {
                web_sys::console::error_1(&format!("Failed to mark as read: {}", e).into());
                return;
            }
            if let Ok(list) = services::list().await {
                set_notifications.set(list);
            }
            if let Ok(count) = services::unread_count().await {
                set_unread.set(count);
            }
        });
    };

    let mark_all = move |_| {
        spawn_local(async move {
            if let Err(e) = services::mark_all_read().await {
                web_sys::console::error_1(&format!("Failed to mark all as read: {}", e).into());
                return;
            }
            if let Ok(list) = services::list().await {
                set_notifications.set(list);
            }
            set_unread.set(0);
        });
    };

    view! {
        <div class="notification-bell-container">
            <button class="notification-bell" on:click=toggle>
                "🔔"
                {move || {
                    let count = unread.get();
                    (count > 0)
                        .then(|| {
                            let label = if count > 9 { "9+".to_string() } else { count.to_string() };
                            view! { <span class="notification-badge">{label}</span> }
                        })
                }}
            </button>

            {move || {
                open.get()
                    .then(|| {
                        view! {
                            <div class="notification-overlay" on:click=move |_| set_open.set(false)></div>
                            <div class="notification-dropdown">
                                <div class="notification-header">
                                    <h3>"Notifications"</h3>
                                    <button class="mark-all-read" on:click=mark_all>"Mark all read"</button>
                                </div>
                                <div class="notification-list">
                                    {move || {
                                        notifications.with(|list| {
                                            if list.is_empty() {
                                                view! {
                                                    <div class="no-notifications">
                                                        <p>"No notifications yet"</p>
                                                    </div>
                                                }
                                                .into_any()
                                            } else {
                                                list.iter()
                                                    .map(|notification| {
                                                        let id = notification.id;
                                                        let is_read = notification.is_read;
                                                        view! {
                                                            <div
                                                                class="notification-item"
                                                                class:unread=!is_read
                                                                on:click=move |_| {
                                                                    if !is_read {
                                                                        mark_one(id);
                                                                    }
                                                                }
                                                            >
                                                                <span class="notif-icon">{notification.icon()}</span>
                                                                <div class="notif-content">
                                                                    <p>{notification.message.clone()}</p>
                                                                    <span class="notif-time">{notification.created_on()}</span>
                                                                </div>
                                                            </div>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()
                                                    .into_any()
                                            }
                                        })
                                    }}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use send_wrapper::SendWrapper;
    use std::rc::Rc;

    /// Cleanup callbacks must be `Send + Sync` even though the timer
    /// handle is thread-local; the wrapper bridges the two. Mirrors the
    /// shape of the bell's cleanup with a stand-in non-Send handle.
    #[test]
    fn wrapped_timer_cleanup_satisfies_the_cleanup_bounds() {
        fn assert_cleanup_shape<F: FnOnce() + Send + Sync + 'static>(f: F) -> F {
            f
        }

        let handle = SendWrapper::new(Rc::new(()));
        let cleanup = assert_cleanup_shape(move || drop(handle.take()));
        cleanup();
    }
}
