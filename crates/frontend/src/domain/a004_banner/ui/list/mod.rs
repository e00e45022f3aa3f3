pub mod state;

use self::state::create_state;
use crate::domain::a004_banner::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{BANNERS, BANNER_EDIT, BANNER_NEW};
use crate::layout::tabs::{detail_key, tab_label_for_key};
use crate::shared::api_utils::image_url;
use crate::shared::collection::Collection;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::error_panel::ErrorPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::ListView;
use crate::shared::mutation::Mutations;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;
use contracts::domain::a004_banner::{Banner, BannerStatus};
use contracts::shared::list_query::filter::ALL;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn BannerList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_toast();
    let collection = Collection::<Banner>::new();
    let mutations = Mutations::new(collection);
    let state = create_state();

    Effect::new(move |prev: Option<u32>| {
        let version = tabs_store.version(BANNERS);
        if prev != Some(version) {
            log::debug!("loading banners (v{})", version);
            collection.load(api::fetch_banners());
        }
        version
    });

    let list = ListView::new(collection.items, state);
    let (rows, sort) = (list.rows, list.sort);

    let status = RwSignal::new(ALL.to_string());
    Effect::new(move |_| {
        let st = status.get();
        list.update_filters(move |f| f.status = st);
    });

    let active_count = Memo::new(move |_| {
        collection
            .items
            .with(|items| items.iter().filter(|b| b.status == BannerStatus::Active).count())
    });

    let open_tab = move |key: String| tabs_store.open_tab(&key, &tab_label_for_key(&key));
    let refresh = move || collection.load(api::fetch_banners());

    let toggle_status = move |id: String, current: BannerStatus| {
        let next = current.toggled();
        spawn_local(async move {
            match mutations
                .update_entity(id.clone(), api::set_banner_status(&id, next))
                .await
            {
                Some(Ok(banner)) => {
                    toasts.success(format!("Banner is now {}", banner.status.as_str()));
                    // The status filter may now hide the row.
                    list.collection_resized();
                }
                Some(Err(e)) => toasts.error(e.to_string()),
                None => {}
            }
        });
    };

    let confirm_open = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<String>);
    let confirm_delete = Callback::new(move |_| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match mutations.delete_entity(id.clone(), api::delete_banner(&id)).await {
                Some(Ok(())) => {
                    toasts.success("Banner deleted");
                    list.collection_resized();
                }
                Some(Err(e)) => toasts.error(e.to_string()),
                None => {}
            }
        });
    });

    view! {
        <PageFrame page_id="a004_banner--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Home Banners"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || format!("{} / {} active", active_count.get(), collection.items.with(Vec::len))}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Select value=status>
                        <option value=ALL>"All Status"</option>
                        <option value="active">"Active"</option>
                        <option value="inactive">"Inactive"</option>
                    </Select>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| refresh()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_tab(BANNER_NEW.to_string())
                    >
                        {icon("plus")}
                        " Add Banner"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || collection.error.get().map(|err| view! {
                    <ErrorPanel message=err on_retry=Callback::new(move |_| refresh()) />
                })}

                <Show when=move || collection.loading.get() && collection.items.with(Vec::is_empty)>
                    <div class="page__loading"><Spinner /></div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=200.0>"Banner"</TableHeaderCell>
                                <SortableHeaderCell
                                    label="Title"
                                    sort_field="title"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    min_width=180.0
                                />
                                <SortableHeaderCell
                                    label="Status"
                                    sort_field="status"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                />
                                <TableHeaderCell resizable=false min_width=160.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(|banner| {
                                let id_for_toggle = banner.id.clone();
                                let id_for_edit = banner.id.clone();
                                let id_for_delete = banner.id.clone();
                                let id_for_pending = banner.id.clone();
                                let id_for_pending_delete = banner.id.clone();
                                let status = banner.status;
                                let toggle_title = if status == BannerStatus::Active { "Deactivate" } else { "Activate" };
                                let preview = banner.image.as_deref().and_then(image_url);
                                let background = banner.background_color.clone().unwrap_or_default();
                                let title = banner.title.clone().unwrap_or_else(|| "-".to_string());
                                let status_label = status.as_str().to_string();

                                view! {
                                    <TableRow>
                                        <TableCell>
                                            {match preview {
                                                Some(src) => view! {
                                                    <img class="banner-preview" src=src alt="" style:background-color=background />
                                                }.into_any(),
                                                None => view! { <span class="table__thumb table__thumb--empty">{icon("image")}</span> }.into_any(),
                                            }}
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{title}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=status_label />
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <button
                                                    class="table__action"
                                                    title=toggle_title
                                                    disabled=move || mutations.is_pending(&id_for_pending)
                                                    on:click=move |_| toggle_status(id_for_toggle.clone(), status)
                                                >
                                                    {icon("power")}
                                                </button>
                                                <button
                                                    class="table__action"
                                                    title="Edit"
                                                    on:click=move |_| open_tab(detail_key(BANNER_EDIT, &id_for_edit))
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="table__action table__action--danger"
                                                    title="Delete"
                                                    disabled=move || mutations.is_pending(&id_for_pending_delete)
                                                    on:click=move |_| {
                                                        pending_delete.set(Some(id_for_delete.clone()));
                                                        confirm_open.set(true);
                                                    }
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || !collection.loading.get() && rows.with(Vec::is_empty)>
                    <div class="table__empty">"No banners found."</div>
                </Show>

                <PaginationControls
                    current_page=list.current_page()
                    total_pages=list.total_pages()
                    total_count=list.total_count()
                    page_size=list.page_size()
                    on_page_change=Callback::new(move |p| list.go_to_page(p))
                    on_previous=Callback::new(move |_| list.previous_page())
                    on_next=Callback::new(move |_| list.next_page())
                />
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Delete banner".to_string()
                message=Signal::derive(|| "Delete this banner? This cannot be undone.".to_string())
                on_confirm=confirm_delete
            />
        </PageFrame>
    }
}
