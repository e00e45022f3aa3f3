pub mod state;

use self::state::create_state;
use crate::domain::a002_category::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{CATEGORIES, CATEGORY_EDIT, CATEGORY_NEW};
use crate::layout::tabs::{detail_key, tab_label_for_key};
use crate::shared::api_utils::image_url;
use crate::shared::collection::Collection;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::error_panel::ErrorPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::ListView;
use crate::shared::mutation::Mutations;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;
use contracts::domain::a002_category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn CategoryList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_toast();
    let collection = Collection::<Category>::new();
    let mutations = Mutations::new(collection);
    let state = create_state();

    Effect::new(move |prev: Option<u32>| {
        let version = tabs_store.version(CATEGORIES);
        if prev != Some(version) {
            log::debug!("loading categories (v{})", version);
            collection.load(api::fetch_categories());
        }
        version
    });

    let list = ListView::new(collection.items, state);
    let (rows, sort) = (list.rows, list.sort);

    let search = RwSignal::new(String::new());
    Effect::new(move |_| {
        let q = search.get();
        list.update_filters(move |f| f.search_text = q);
    });

    let open_tab = move |key: String| tabs_store.open_tab(&key, &tab_label_for_key(&key));
    let refresh = move || collection.load(api::fetch_categories());

    let confirm_open = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<(String, String)>);
    let confirm_delete = Callback::new(move |_| {
        let Some((id, name)) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match mutations
                .delete_entity(id.clone(), api::delete_category(&id))
                .await
            {
                Some(Ok(())) => {
                    toasts.success(format!("Category \"{}\" deleted", name));
                    list.collection_resized();
                }
                Some(Err(e)) => toasts.error(e.to_string()),
                None => {}
            }
        });
    });

    view! {
        <PageFrame page_id="a002_category--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Categories"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || collection.items.with(Vec::len).to_string()}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <div style="width: 260px;">
                        <Input value=search placeholder="Search categories..." />
                    </div>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| refresh()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_tab(CATEGORY_NEW.to_string())
                    >
                        {icon("plus")}
                        " Add Category"
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
                                <TableHeaderCell resizable=false min_width=80.0>"Image"</TableHeaderCell>
                                <SortableHeaderCell
                                    label="Name"
                                    sort_field="name"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    min_width=240.0
                                />
                                <TableHeaderCell resizable=false min_width=120.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(|category| {
                                let id_for_edit = category.id.clone();
                                let id_for_delete = category.id.clone();
                                let id_for_pending = category.id.clone();
                                let name_for_delete = category.name.clone();
                                let name = category.name.clone();
                                let thumb = category.image.as_deref().and_then(image_url);

                                view! {
                                    <TableRow>
                                        <TableCell>
                                            {match thumb {
                                                Some(src) => view! { <img class="table__thumb" src=src alt="" /> }.into_any(),
                                                None => view! { <span class="table__thumb table__thumb--empty">{icon("image")}</span> }.into_any(),
                                            }}
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <button
                                                    class="table__action"
                                                    title="Edit"
                                                    on:click=move |_| open_tab(detail_key(CATEGORY_EDIT, &id_for_edit))
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="table__action table__action--danger"
                                                    title="Delete"
                                                    disabled=move || mutations.is_pending(&id_for_pending)
                                                    on:click=move |_| {
                                                        pending_delete.set(Some((id_for_delete.clone(), name_for_delete.clone())));
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
                    <div class="table__empty">"No categories found."</div>
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
                title="Delete category".to_string()
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|(_, name)| format!("Delete category \"{}\"?", name))
                        .unwrap_or_default()
                })
                on_confirm=confirm_delete
            />
        </PageFrame>
    }
}
