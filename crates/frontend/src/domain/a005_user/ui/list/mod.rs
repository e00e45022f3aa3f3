pub mod state;

use self::state::create_state;
use crate::domain::a005_user::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::USERS;
use crate::shared::api_utils::image_url;
use crate::shared::collection::Collection;
use crate::shared::components::error_panel::ErrorPanel;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::ListView;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a005_user::{User, ROLE_OPTIONS, STATUS_OPTIONS};
use contracts::shared::list_query::filter::ALL;
use leptos::prelude::*;
use thaw::*;

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[component]
pub fn UserList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let collection = Collection::<User>::new();
    let state = create_state();
    let is_filter_expanded = RwSignal::new(true);

    Effect::new(move |prev: Option<u32>| {
        let version = tabs_store.version(USERS);
        if prev != Some(version) {
            log::debug!("loading users (v{})", version);
            collection.load(api::fetch_users());
        }
        version
    });

    let list = ListView::new(collection.items, state);
    let (filtered, rows, sort) = (list.filtered, list.rows, list.sort);

    let role = RwSignal::new(ALL.to_string());
    let status = RwSignal::new(ALL.to_string());
    let search = RwSignal::new(String::new());
    Effect::new(move |_| {
        let (r, st, q) = (role.get(), status.get(), search.get());
        list.update_filters(move |f| {
            f.role = r;
            f.status = st;
            f.search_text = q;
        });
    });

    let admins = Memo::new(move |_| collection.items.with(|u| u.iter().filter(|u| u.is_admin()).count()));
    let refresh = move || collection.load(api::fetch_users());

    view! {
        <PageFrame page_id="a005_user--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || collection.items.with(Vec::len).to_string()}
                    </UiBadge>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Users"
                        value=Signal::derive(move || collection.items.with(Vec::len).to_string())
                        icon_name="users"
                    />
                    <StatCard
                        label="Administrators"
                        value=Signal::derive(move || admins.get().to_string())
                        icon_name="user"
                        accent="info"
                    />
                    <StatCard
                        label="Matching Filters"
                        value=Signal::derive(move || filtered.with(Vec::len).to_string())
                        icon_name="filter"
                        accent="success"
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
                            " Refresh"
                        </Button>
                    }
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Role"</Label>
                            <Select value=role>
                                {ROLE_OPTIONS.iter().map(|(value, label)| view! {
                                    <option value=*value>{*label}</option>
                                }).collect_view()}
                            </Select>
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Status"</Label>
                            <Select value=status>
                                {STATUS_OPTIONS.iter().map(|(value, label)| view! {
                                    <option value=*value>{*label}</option>
                                }).collect_view()}
                            </Select>
                        </Flex>
                        <div style="flex: 1; max-width: 320px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search"</Label>
                                <Input value=search placeholder="Name, email or phone..." />
                            </Flex>
                        </div>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                role.set(ALL.to_string());
                                status.set(ALL.to_string());
                                search.set(String::new());
                            }
                        >
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
                                <SortableHeaderCell
                                    label="User"
                                    sort_field="name"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    min_width=200.0
                                />
                                <SortableHeaderCell
                                    label="Email"
                                    sort_field="email"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    min_width=200.0
                                />
                                <TableHeaderCell resizable=false>"Phone"</TableHeaderCell>
                                <SortableHeaderCell
                                    label="Role"
                                    sort_field="role"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                />
                                <SortableHeaderCell
                                    label="Status"
                                    sort_field="status"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                />
                                <SortableHeaderCell
                                    label="Orders"
                                    sort_field="orders"
                                    current_sort=sort
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    align="right"
                                />
                                <TableHeaderCell resizable=false min_width=160.0>"Location"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(|user| {
                                let role_variant = if user.is_admin() { "primary" } else { "neutral" }.to_string();
                                let role_label = user.role_label();
                                let status = user.status.clone().unwrap_or_else(|| "Unknown".to_string());
                                let location = user
                                    .address
                                    .as_ref()
                                    .map(|a| a.city_country())
                                    .unwrap_or_else(|| "-".to_string());
                                let avatar = user.avatar.as_deref().and_then(image_url);
                                let user_initials = initials(&user.name);
                                let order_count = user.order_count();
                                let phone = user.phone.unwrap_or_else(|| "-".to_string());
                                let (name, email) = (user.name, user.email);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <div class="user-cell">
                                                {match avatar {
                                                    Some(src) => view! { <img class="user-avatar" src=src alt="" /> }.into_any(),
                                                    None => view! { <span class="user-avatar user-avatar--initials">{user_initials}</span> }.into_any(),
                                                }}
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </div>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{email}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>{phone}</TableCell>
                                        <TableCell>
                                            <UiBadge variant=role_variant>
                                                {role_label}
                                            </UiBadge>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=status />
                                        </TableCell>
                                        <TableCell class="table__cell--right">{order_count}</TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{location}</TableCellLayout>
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
                            "No users yet."
                        } else {
                            "No users match the current filters."
                        }}
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("ann lee smith"), "AL");
        assert_eq!(initials("Bob"), "B");
        assert_eq!(initials("  "), "");
    }
}
