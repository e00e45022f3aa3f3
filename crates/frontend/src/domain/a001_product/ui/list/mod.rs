pub mod state;

use self::state::create_state;
use crate::domain::a001_product::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{PRODUCTS, PRODUCT_DETAIL, PRODUCT_EDIT, PRODUCT_NEW};
use crate::layout::tabs::{detail_key, tab_label_for_key};
use crate::shared::api_utils::image_url;
use crate::shared::collection::Collection;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::error_panel::ErrorPanel;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::star_rating::StarRating;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::format::{format_count, format_money};
use crate::shared::icons::icon;
use crate::shared::list_utils::ListView;
use crate::shared::mutation::Mutations;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;
use contracts::domain::a001_product::Product;
use contracts::shared::list_query::filter::ALL;
use contracts::shared::list_query::facets;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Stock cell badge: out of stock, low stock or the plain quantity.
fn stock_label(product: &Product) -> (&'static str, String) {
    if !product.in_stock() {
        ("error", "Out of stock".to_string())
    } else if product.low_stock() {
        ("warning", format!("Low: {}", format_count(product.stock_quantity)))
    } else {
        ("success", format_count(product.stock_quantity))
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_toast();
    let collection = Collection::<Product>::new();
    let mutations = Mutations::new(collection);
    let state = create_state();
    let is_filter_expanded = RwSignal::new(false);

    // Runs on mount and again whenever a form tab saved a product.
    Effect::new(move |prev: Option<u32>| {
        let version = tabs_store.version(PRODUCTS);
        if prev != Some(version) {
            log::debug!("loading products (v{})", version);
            collection.load(api::fetch_products());
        }
        version
    });

    let list = ListView::new(collection.items, state);

    let category = RwSignal::new(ALL.to_string());
    let sub_category = RwSignal::new(ALL.to_string());
    let third_level = RwSignal::new(ALL.to_string());
    let search = RwSignal::new(String::new());
    Effect::new(move |_| {
        let (c, sc, tl, q) = (category.get(), sub_category.get(), third_level.get(), search.get());
        list.update_filters(move |f| {
            f.category = c;
            f.sub_category = sc;
            f.third_level_category = tl;
            f.search_text = q;
        });
    });
    let clear_filters = move || {
        category.set(ALL.to_string());
        sub_category.set(ALL.to_string());
        third_level.set(ALL.to_string());
        search.set(String::new());
    };

    let facet_options = Memo::new(move |_| collection.items.with(|items| facets(items)));
    let (filtered, rows, sort) = (list.filtered, list.rows, list.sort);
    let selection = list.selection();

    let open_tab = move |key: String| tabs_store.open_tab(&key, &tab_label_for_key(&key));

    let confirm_open = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<(String, String)>);
    let ask_delete = move |id: String, name: String| {
        pending_delete.set(Some((id, name)));
        confirm_open.set(true);
    };
    let confirm_delete = Callback::new(move |_| {
        let Some((id, name)) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match mutations
                .delete_entity(id.clone(), api::delete_product(&id))
                .await
            {
                Some(Ok(())) => {
                    toasts.success(format!("Product \"{}\" deleted", name));
                    list.collection_resized();
                }
                Some(Err(e)) => toasts.error(e.to_string()),
                None => {}
            }
        });
    });

    let refresh = move || collection.load(api::fetch_products());

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || collection.items.with(Vec::len).to_string()}
                    </UiBadge>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Products"
                        value=Signal::derive(move || collection.items.with(Vec::len).to_string())
                        icon_name="products"
                    />
                    <StatCard
                        label="Matching Filters"
                        value=Signal::derive(move || filtered.with(Vec::len).to_string())
                        icon_name="filter"
                        accent="info"
                    />
                    <StatCard
                        label="On This Page"
                        value=Signal::derive(move || rows.with(Vec::len).to_string())
                        icon_name="list"
                        accent="success"
                    />
                    <StatCard
                        label="Selected"
                        value=Signal::derive(move || selection.with(|s| s.len()).to_string())
                        icon_name="eye"
                        accent="warning"
                    />
                </div>

                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=list.active_filters_count()
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=list.current_page()
                            total_pages=list.total_pages()
                            total_count=list.total_count()
                            page_size=list.page_size()
                            on_page_change=Callback::new(move |p| list.go_to_page(p))
                            on_previous=Callback::new(move |_| list.previous_page())
                            on_next=Callback::new(move |_| list.next_page())
                        />
                    }
                    actions=move || view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| refresh()
                            disabled=Signal::derive(move || collection.loading.get())
                        >
                            {icon("refresh")}
                            {move || if collection.loading.get() { " Loading..." } else { " Refresh" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| open_tab(PRODUCT_NEW.to_string())
                        >
                            {icon("plus")}
                            " Add Product"
                        </Button>
                    }
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Category"</Label>
                            <Select value=category>
                                <option value=ALL>"All Categories"</option>
                                {move || facet_options.with(|f| f.categories.iter().map(|c| view! {
                                    <option value=c.clone()>{c.clone()}</option>
                                }).collect_view())}
                            </Select>
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Sub Category"</Label>
                            <Select value=sub_category>
                                <option value=ALL>"All Sub Categories"</option>
                                {move || facet_options.with(|f| f.sub_categories.iter().map(|c| view! {
                                    <option value=c.clone()>{c.clone()}</option>
                                }).collect_view())}
                            </Select>
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Third Level"</Label>
                            // TODO: options once the backend exposes third-level categories.
                            <Select value=third_level>
                                <option value=ALL>"All"</option>
                            </Select>
                        </Flex>
                        <div style="flex: 1; max-width: 320px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search"</Label>
                                <Input value=search placeholder="Name, brand or SKU..." />
                            </Flex>
                        </div>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| clear_filters()>
                            "Clear"
                        </Button>
                    </Flex>
                </FilterPanel>

                {move || collection.error.get().map(|err| view! {
                    <ErrorPanel message=err on_retry=Callback::new(move |_| refresh()) />
                })}

                <Show when=move || collection.loading.get() && collection.items.with(Vec::is_empty)>
                    <div class="page__loading"><Spinner /></div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox state=list.header_state() on_change=Callback::new(move |checked| list.toggle_all(checked)) />
                                <TableHeaderCell resizable=false min_width=64.0>"Image"</TableHeaderCell>
                                <SortableHeaderCell
                                    label="Name"
                                    sort_field="name"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    min_width=220.0
                                />
                                <SortableHeaderCell
                                    label="Brand"
                                    sort_field="brand"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                />
                                <SortableHeaderCell
                                    label="Category"
                                    sort_field="category"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    min_width=180.0
                                />
                                <SortableHeaderCell
                                    label="Price"
                                    sort_field="price"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    align="right"
                                />
                                <SortableHeaderCell
                                    label="Stock"
                                    sort_field="stockQuantity"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    min_width=90.0
                                />
                                <SortableHeaderCell
                                    label="Rating"
                                    sort_field="averageRating"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    min_width=110.0
                                />
                                <TableHeaderCell resizable=false min_width=120.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || rows.get().into_iter().map(|product| {
                                let id = product.id.clone();
                                let id_for_view = id.clone();
                                let id_for_edit = id.clone();
                                let id_for_delete = id.clone();
                                let id_for_pending = id.clone();
                                let name_for_delete = product.name.clone();
                                let name = product.name.clone();
                                let thumb = product.primary_image().and_then(image_url);
                                let brand = product.brand.clone().unwrap_or_else(|| "-".to_string());
                                let category_path = product.category_path();
                                let price = format_money(product.price);
                                let original_price = format_money(product.original_price);
                                let discount = product.discount_percent();
                                let (stock_variant, stock_text) = stock_label(&product);
                                let rating = product.average_rating;

                                view! {
                                    <TableRow>
                                        <TableCellCheckbox
                                            item_id=id
                                            selected=selection
                                            on_change=Callback::new(move |(id, checked): (String, bool)| list.toggle_selection(&id, checked))
                                        />
                                        <TableCell>
                                            {match thumb {
                                                Some(src) => view! { <img class="table__thumb" src=src alt="" /> }.into_any(),
                                                None => view! { <span class="table__thumb table__thumb--empty">{icon("image")}</span> }.into_any(),
                                            }}
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <a
                                                    href="#"
                                                    class="table__link"
                                                    on:click=move |e| {
                                                        e.prevent_default();
                                                        open_tab(detail_key(PRODUCT_DETAIL, &id_for_view));
                                                    }
                                                >
                                                    {name}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{brand}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{category_path}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class="table__cell--right">
                                            <div class="price-cell">
                                                <span class="price-cell__current">{price}</span>
                                                {(discount > 0).then(|| view! {
                                                    <span class="price-cell__original">{original_price}</span>
                                                    <span class="price-cell__discount">{format!("-{}%", discount)}</span>
                                                })}
                                            </div>
                                        </TableCell>
                                        <TableCell>
                                            <UiBadge variant=stock_variant.to_string()>{stock_text}</UiBadge>
                                        </TableCell>
                                        <TableCell>
                                            <StarRating rating=Signal::derive(move || rating) show_value=true />
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <button
                                                    class="table__action"
                                                    title="Edit"
                                                    on:click=move |_| open_tab(detail_key(PRODUCT_EDIT, &id_for_edit))
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="table__action table__action--danger"
                                                    title="Delete"
                                                    disabled=move || mutations.is_pending(&id_for_pending)
                                                    on:click=move |_| ask_delete(id_for_delete.clone(), name_for_delete.clone())
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
                    <div class="table__empty">
                        {move || if collection.items.with(Vec::is_empty) {
                            "No products yet."
                        } else {
                            "No products match the current filters."
                        }}
                    </div>
                </Show>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Delete product".to_string()
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|(_, name)| format!("Delete \"{}\"? This cannot be undone.", name))
                        .unwrap_or_default()
                })
                on_confirm=confirm_delete
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: f64) -> Product {
        Product {
            id: "p1".into(),
            stock_quantity: stock,
            ..Default::default()
        }
    }

    #[test]
    fn stock_label_marks_empty_and_low_stock() {
        assert_eq!(stock_label(&product(0.0)).0, "error");
        assert_eq!(stock_label(&product(3.0)).0, "warning");
        assert_eq!(stock_label(&product(250.0)).0, "success");
    }
}
