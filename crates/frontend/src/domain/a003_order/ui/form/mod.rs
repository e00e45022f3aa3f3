use crate::domain::a003_order::api;
use crate::shared::components::error_panel::ErrorPanel;
use crate::shared::components::status_badge::OrderStatusBadge;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};
use crate::shared::toast::use_toast;
use crate::system::auth::context::AuthContext;
use contracts::domain::a003_order::{Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Status update for one order. Only the status is editable.
#[component]
pub fn OrderStatusForm(
    id: String,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_toast();
    let auth = use_context::<AuthContext>();
    let id = StoredValue::new(id);
    let order = RwSignal::new(None::<Order>);
    let status = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error.set(None);
        let id = id.get_value();
        spawn_local(async move {
            match api::fetch_order(&id).await {
                Ok(o) => {
                    let _ = status.try_set(o.order_status.to_string());
                    let _ = order.try_set(Some(o));
                }
                Err(e) => {
                    log::error!("load order {} for edit: {}", id, e);
                    if let Some(auth) = auth {
                        auth.expire_on(&e);
                    }
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
            let _ = loading.try_set(false);
        });
    };
    load();

    let save = move || {
        let wanted = OrderStatus::parse(&status.get_untracked());
        if !OrderStatus::EDITABLE.contains(&wanted) {
            error.set(Some("Choose a status to move the order to".into()));
            return;
        }
        let id = id.get_value();
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match api::update_order_status(&id, wanted).await {
                Ok(updated) => {
                    log::info!("order {} -> {}", updated.id, updated.order_status);
                    toasts.success(format!("Order marked {}", updated.order_status));
                    on_saved.run(());
                }
                Err(e) => {
                    if let Some(auth) = auth {
                        auth.expire_on(&e);
                    }
                    toasts.error(e.to_string());
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
            let _ = saving.try_set(false);
        });
    };

    view! {
        <PageFrame page_id="a003_order--form" category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || order.with(|o| match o {
                            Some(o) => format!("Update Order #{}", o.short_id()),
                            None => "Update Order".to_string(),
                        })}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| save()
                        disabled=Signal::derive(move || saving.get() || order.with(Option::is_none))
                    >
                        {icon("save")}
                        {move || if saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                        " Cancel"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || loading.get()>
                    <div class="page__loading"><Spinner /></div>
                </Show>

                {move || match (error.get(), order.with(Option::is_some)) {
                    (Some(err), false) => view! {
                        <ErrorPanel message=err on_retry=Callback::new(move |_| load()) />
                    }.into_any(),
                    (Some(err), true) => view! { <div class="alert alert--error">{err}</div> }.into_any(),
                    (None, _) => ().into_any(),
                }}

                {move || order.get().map(|o| {
                    let current = o.order_status.clone();
                    let locked = (!OrderStatus::EDITABLE.contains(&o.order_status))
                        .then(|| o.order_status.to_string());
                    let customer = o.customer_name().to_string();
                    let total = format_money(o.total_price);
                    view! {
                        <div class="form" style="max-width: 520px;">
                            <div class="detail-grid">
                                <div class="detail-grid__row">
                                    <span class="detail-grid__label">"Customer"</span>
                                    <span class="detail-grid__value">{customer}</span>
                                </div>
                                <div class="detail-grid__row">
                                    <span class="detail-grid__label">"Total"</span>
                                    <span class="detail-grid__value">{total}</span>
                                </div>
                                <div class="detail-grid__row">
                                    <span class="detail-grid__label">"Current status"</span>
                                    <span class="detail-grid__value">
                                        <OrderStatusBadge status=Signal::derive(move || current.clone()) />
                                    </span>
                                </div>
                            </div>

                            <div class="form__group">
                                <label class="form__label">"New status"</label>
                                <Select value=status>
                                    {OrderStatus::EDITABLE.iter().map(|s| view! {
                                        <option value=s.to_string()>{s.to_string()}</option>
                                    }).collect_view()}
                                    {locked.map(|s| view! {
                                        <option value=s.clone() disabled=true>{s.clone()}</option>
                                    })}
                                </Select>
                            </div>
                        </div>
                    }
                })}
            </div>
        </PageFrame>
    }
}
