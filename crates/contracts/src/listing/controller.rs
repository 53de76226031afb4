use super::kind::EntityKind;
use super::notice::Notice;
use super::validation::FormMode;
use super::value::{Draft, FieldErrors, FieldValue};
use crate::domain::common::AggregateRoot;

/// Общие тексты защит, не зависящие от вида агрегата
pub const MSG_PROTECTED: &str = "Системная запись защищена от изменений";
pub const MSG_DELETE_ACTIVE: &str = "Нельзя удалить активную запись: сначала деактивируйте её";

/// Фильтр по статусу, применяется до пагинации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(&self, is_active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => is_active,
            StatusFilter::Inactive => !is_active,
        }
    }

    /// Код значения для select
    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Все",
            StatusFilter::Active => "Активные",
            StatusFilter::Inactive => "Неактивные",
        }
    }
}

/// Явное состояние модального окна страницы списка
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<K> {
    Closed,
    Viewing(K),
    Creating,
    Editing(K),
}

impl<K> ModalState<K> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// Режим формы, когда открыто создание или редактирование
    pub fn form_mode(&self) -> Option<FormMode> {
        match self {
            ModalState::Creating => Some(FormMode::Create),
            ModalState::Editing(_) => Some(FormMode::Edit),
            _ => None,
        }
    }
}

/// Порядок сортировки списка; None у контроллера означает порядок добавления
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: &'static str,
    pub ascending: bool,
}

/// Срез текущей страницы, производное от состояния контроллера
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<K> {
    pub rows: Vec<K>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

/// Универсальный контроллер страницы списка.
///
/// Владеет коллекцией одного вида агрегата и выполняет все переходы
/// синхронно: фильтр -> сортировка -> пагинация, модальный CRUD с
/// валидацией, шлюз подтверждения удаления. Страница держит контроллер
/// в сигнале и передаёт возвращённые уведомления тост-сервису.
#[derive(Debug, Clone)]
pub struct EntityListController<K: EntityKind> {
    items: Vec<K>,
    search_term: String,
    status_filter: StatusFilter,
    sort: Option<SortOrder>,
    /// Номер страницы, с единицы
    page: usize,
    page_size: usize,
    modal: ModalState<K>,
    delete_gate: Option<K>,
    draft: Draft,
    errors: FieldErrors,
    /// Счётчик изменений коллекции
    version: u64,
}

impl<K: EntityKind> EntityListController<K> {
    pub fn new(items: Vec<K>) -> Self {
        Self {
            items,
            search_term: String::new(),
            status_filter: StatusFilter::All,
            sort: None,
            page: 1,
            page_size: K::PAGE_SIZE,
            modal: ModalState::Closed,
            delete_gate: None,
            draft: Draft::new(),
            errors: FieldErrors::new(),
            version: 0,
        }
    }

    /// Заменить коллекцию данными поставщика фикстур и сбросить
    /// фильтры, сортировку, пагинацию и модальные состояния
    pub fn reload(&mut self, items: Vec<K>) {
        self.items = items;
        self.search_term.clear();
        self.status_filter = StatusFilter::All;
        self.sort = None;
        self.page = 1;
        self.modal = ModalState::Closed;
        self.delete_gate = None;
        self.draft = Draft::new();
        self.errors.clear();
        self.version += 1;
    }

    // ------------------------------------------------------------------
    // Доступ к состоянию
    // ------------------------------------------------------------------

    pub fn items(&self) -> &[K] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: K::Id) -> Option<&K> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn modal(&self) -> &ModalState<K> {
        &self.modal
    }

    pub fn delete_target(&self) -> Option<&K> {
        self.delete_gate.as_ref()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    // ------------------------------------------------------------------
    // Фильтрация, сортировка, пагинация
    // ------------------------------------------------------------------

    /// Обновить строку поиска; страница возвращается к началу
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    /// Сменить фильтр статуса; страница возвращается к началу.
    /// Повторное применение того же значения даёт тот же результат.
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
        self.page = 1;
    }

    /// Клик по заголовку колонки: та же колонка меняет направление,
    /// новая сортируется по возрастанию
    pub fn toggle_sort(&mut self, field: &'static str) {
        self.sort = match self.sort {
            Some(order) if order.field == field => Some(SortOrder {
                field,
                ascending: !order.ascending,
            }),
            _ => Some(SortOrder {
                field,
                ascending: true,
            }),
        };
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        let total = self.total_pages().max(1);
        self.page = page.clamp(1, total);
    }

    pub fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        self.page_size = size;
        self.page = 1;
    }

    /// Количество записей после фильтров
    pub fn filtered_count(&self) -> usize {
        let term = self.normalized_term();
        self.items
            .iter()
            .filter(|item| self.passes(item, &term))
            .count()
    }

    /// Число страниц; 0 для пустой выборки
    pub fn total_pages(&self) -> usize {
        let count = self.filtered_count();
        if count == 0 {
            0
        } else {
            count.div_ceil(self.page_size)
        }
    }

    /// Срез текущей страницы: фильтр -> сортировка -> пагинация.
    /// Состояние не меняет; инвариант страницы поддерживают операции.
    pub fn view(&self) -> PageView<K> {
        let refs = self.selection();
        let filtered_count = refs.len();
        let total_pages = if filtered_count == 0 {
            0
        } else {
            filtered_count.div_ceil(self.page_size)
        };
        let start = (self.page - 1) * self.page_size;
        let rows = refs
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();

        PageView {
            rows,
            page: self.page,
            total_pages,
            filtered_count,
        }
    }

    /// Отфильтрованная и отсортированная выборка целиком, без пагинации.
    /// Используется выгрузкой в CSV и JSON.
    pub fn filtered_rows(&self) -> Vec<K> {
        self.selection().into_iter().cloned().collect()
    }

    fn selection(&self) -> Vec<&K> {
        let term = self.normalized_term();
        let mut refs: Vec<&K> = self
            .items
            .iter()
            .filter(|item| self.passes(item, &term))
            .collect();

        if let Some(order) = self.sort {
            refs.sort_by(|a, b| {
                let ord = a.compare_by_field(b, order.field);
                if order.ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
        }

        refs
    }

    fn normalized_term(&self) -> String {
        self.search_term.trim().to_lowercase()
    }

    fn passes(&self, item: &K, term: &str) -> bool {
        self.status_filter.matches(item.is_active())
            && (term.is_empty() || item.matches_filter(term))
    }

    /// Вернуть страницу в допустимый диапазон после изменения выборки
    fn reclamp(&mut self) {
        let total = self.total_pages();
        if total == 0 {
            self.page = 1;
        } else if self.page > total {
            self.page = total;
        }
    }

    // ------------------------------------------------------------------
    // Модальные состояния и черновик
    // ------------------------------------------------------------------

    pub fn open_create(&mut self) {
        self.draft = K::empty_draft();
        self.errors.clear();
        self.modal = ModalState::Creating;
    }

    /// Открыть форму редактирования; защищённые записи не редактируются
    pub fn open_edit(&mut self, id: K::Id) -> Option<Notice> {
        let entity = self.find(id)?.clone();
        if entity.is_protected() {
            return Some(Notice::warning(MSG_PROTECTED));
        }
        self.draft = entity.to_draft();
        self.errors.clear();
        self.modal = ModalState::Editing(entity);
        None
    }

    /// Открыть просмотр; черновик не трогаем
    pub fn open_view(&mut self, id: K::Id) {
        if let Some(entity) = self.find(id).cloned() {
            self.modal = ModalState::Viewing(entity);
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        self.draft = Draft::new();
        self.errors.clear();
    }

    /// Записать значение поля черновика и снять с поля прежнюю ошибку
    pub fn update_field(&mut self, field: &'static str, value: FieldValue) {
        self.draft.set(field, value);
        self.errors.remove(field);
    }

    /// Проверить черновик без изменения состояния
    pub fn validate(&self) -> FieldErrors {
        let mode = self.modal.form_mode().unwrap_or(FormMode::Create);
        K::validate_draft(&self.draft, mode)
    }

    /// Сохранить черновик. При ошибках валидации форма остаётся открытой,
    /// ошибки попадают в errors(), коллекция не меняется.
    pub fn save(&mut self) -> Option<Notice> {
        let mode = self.modal.form_mode()?;
        let errors = K::validate_draft(&self.draft, mode);
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        let notice = match self.modal.clone() {
            ModalState::Creating => {
                self.items.push(K::new_for_insert(&self.draft));
                Notice::success(K::messages().created)
            }
            ModalState::Editing(target) => {
                let id = target.id();
                let item = self.items.iter_mut().find(|item| item.id() == id)?;
                item.apply_draft(&self.draft);
                item.metadata_mut().touch();
                item.metadata_mut().increment_version();
                Notice::success(K::messages().updated)
            }
            _ => return None,
        };

        self.modal = ModalState::Closed;
        self.draft = Draft::new();
        self.errors.clear();
        self.version += 1;
        self.reclamp();
        Some(notice)
    }

    // ------------------------------------------------------------------
    // Удаление и переключение статуса
    // ------------------------------------------------------------------

    /// Запросить удаление. Защищённые и активные записи отклоняются
    /// уведомлением, иначе открывается шлюз подтверждения.
    pub fn request_delete(&mut self, id: K::Id) -> Option<Notice> {
        let entity = self.find(id)?.clone();
        if entity.is_protected() {
            return Some(Notice::warning(MSG_PROTECTED));
        }
        if entity.is_active() {
            return Some(Notice::warning(MSG_DELETE_ACTIVE));
        }
        self.delete_gate = Some(entity);
        None
    }

    /// Подтвердить удаление записи из шлюза
    pub fn confirm_delete(&mut self) -> Option<Notice> {
        let target = self.delete_gate.take()?;
        let id = target.id();
        self.items.retain(|item| item.id() != id);
        self.version += 1;
        self.reclamp();
        Some(Notice::destructive(K::messages().deleted))
    }

    pub fn cancel_delete(&mut self) {
        self.delete_gate = None;
    }

    /// Переключить признак активности записи
    pub fn toggle_active(&mut self, id: K::Id) -> Option<Notice> {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        if item.is_protected() {
            return Some(Notice::warning(MSG_PROTECTED));
        }
        let now_active = !item.is_active();
        item.set_active(now_active);
        item.metadata_mut().touch();
        item.metadata_mut().increment_version();
        self.version += 1;
        self.reclamp();
        let message = if now_active {
            K::messages().activated
        } else {
            K::messages().deactivated
        };
        Some(Notice::info(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::Category;
    use crate::domain::a006_role::Role;
    use crate::listing::notice::NoticeKind;

    fn category(name: &str, active: bool) -> Category {
        let mut item = Category::new(
            name.to_string(),
            format!("Описание: {name}"),
            None,
        );
        item.base.is_active = active;
        item
    }

    fn seeded(count: usize) -> EntityListController<Category> {
        let items = (1..=count)
            .map(|n| category(&format!("Категория {n:02}"), true))
            .collect();
        EntityListController::new(items)
    }

    fn fill_category_draft(ctl: &mut EntityListController<Category>, name: &str) {
        ctl.update_field("name", FieldValue::text(name));
        ctl.update_field("description", FieldValue::text("Описание"));
    }

    #[test]
    fn ten_items_split_into_pages_of_seven_and_three() {
        let mut ctl = seeded(10);
        let view = ctl.view();
        assert_eq!(view.rows.len(), 7);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.filtered_count, 10);

        ctl.set_page(2);
        let view = ctl.view();
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.page, 2);
    }

    #[test]
    fn confirmed_delete_removes_target_and_shrinks_collection() {
        let mut ctl = seeded(5);
        let target_id = ctl.items()[2].id();
        ctl.toggle_active(target_id);

        let before = ctl.len();
        let version_before = ctl.version();
        assert!(ctl.request_delete(target_id).is_none());
        assert!(ctl.delete_target().is_some());

        let notice = ctl.confirm_delete().unwrap();
        assert_eq!(notice.kind, NoticeKind::Destructive);
        assert_eq!(ctl.len(), before - 1);
        assert!(ctl.find(target_id).is_none());
        assert!(ctl.delete_target().is_none());
        assert!(ctl.version() > version_before);
    }

    #[test]
    fn delete_of_active_item_is_rejected_without_side_effects() {
        let mut ctl = seeded(5);
        let target_id = ctl.items()[0].id();

        let notice = ctl.request_delete(target_id).unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.message, MSG_DELETE_ACTIVE);
        assert_eq!(ctl.len(), 5);
        assert!(ctl.delete_target().is_none());
    }

    #[test]
    fn cancel_delete_leaves_collection_intact() {
        let mut ctl = seeded(3);
        let target_id = ctl.items()[1].id();
        ctl.toggle_active(target_id);
        ctl.request_delete(target_id);

        ctl.cancel_delete();
        assert!(ctl.delete_target().is_none());
        assert_eq!(ctl.len(), 3);
        assert!(ctl.find(target_id).is_some());
    }

    #[test]
    fn second_confirm_without_gate_is_noop() {
        let mut ctl = seeded(3);
        let target_id = ctl.items()[0].id();
        ctl.toggle_active(target_id);
        ctl.request_delete(target_id);
        assert!(ctl.confirm_delete().is_some());
        assert!(ctl.confirm_delete().is_none());
        assert_eq!(ctl.len(), 2);
    }

    #[test]
    fn create_save_appends_item_with_fresh_unique_id() {
        let mut ctl = seeded(4);
        ctl.open_create();
        fill_category_draft(&mut ctl, "Новая категория");

        let notice = ctl.save().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(ctl.len(), 5);
        assert_eq!(*ctl.modal(), ModalState::Closed);

        let created = ctl.items().last().unwrap();
        assert_eq!(created.name, "Новая категория");
        assert!(created.is_active());

        let mut ids: Vec<_> = ctl.items().iter().map(|c| c.id()).collect();
        ids.sort_by_key(|id| id.0);
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn edit_save_replaces_fields_in_place_keeping_id() {
        let mut ctl = seeded(4);
        let target_id = ctl.items()[1].id();

        assert!(ctl.open_edit(target_id).is_none());
        ctl.update_field("name", FieldValue::text("Переименованная"));

        let notice = ctl.save().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(ctl.len(), 4);

        let edited = ctl.find(target_id).unwrap();
        assert_eq!(edited.name, "Переименованная");
        assert_eq!(edited.metadata().version, 1);
        assert!(edited.metadata().updated_at >= edited.metadata().created_at);
    }

    #[test]
    fn save_with_blank_required_name_keeps_modal_open() {
        let mut ctl = seeded(4);
        ctl.open_create();
        ctl.update_field("name", FieldValue::text("   "));
        ctl.update_field("description", FieldValue::text("Описание"));

        assert!(ctl.save().is_none());
        assert_eq!(ctl.len(), 4);
        assert_eq!(*ctl.modal(), ModalState::Creating);
        assert!(ctl.error("name").is_some());
    }

    #[test]
    fn update_field_clears_previous_error() {
        let mut ctl = seeded(2);
        ctl.open_create();
        ctl.save();
        assert!(ctl.error("name").is_some());

        ctl.update_field("name", FieldValue::text("Категория"));
        assert!(ctl.error("name").is_none());
    }

    #[test]
    fn save_without_open_form_is_noop() {
        let mut ctl = seeded(3);
        assert!(ctl.save().is_none());
        assert_eq!(ctl.len(), 3);

        let id = ctl.items()[0].id();
        ctl.open_view(id);
        assert!(ctl.save().is_none());
        assert_eq!(ctl.len(), 3);
    }

    #[test]
    fn close_modal_discards_draft_and_errors() {
        let mut ctl = seeded(2);
        ctl.open_create();
        fill_category_draft(&mut ctl, "Черновик");
        ctl.close_modal();

        assert_eq!(*ctl.modal(), ModalState::Closed);
        assert!(ctl.draft().is_empty());
        assert!(ctl.errors().is_empty());
    }

    #[test]
    fn open_view_does_not_touch_draft() {
        let mut ctl = seeded(2);
        let id = ctl.items()[0].id();
        ctl.open_view(id);
        assert!(matches!(ctl.modal(), ModalState::Viewing(_)));
        assert!(ctl.draft().is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring_and_resets_page() {
        let mut ctl = seeded(10);
        ctl.set_page(2);
        ctl.set_search_term("кАтегория 0");

        let view = ctl.view();
        assert_eq!(view.page, 1);
        assert_eq!(view.filtered_count, 9);

        ctl.set_search_term("  категория 10  ");
        assert_eq!(ctl.view().filtered_count, 1);
    }

    #[test]
    fn empty_search_matches_all() {
        let mut ctl = seeded(4);
        ctl.set_search_term("   ");
        assert_eq!(ctl.view().filtered_count, 4);
    }

    #[test]
    fn status_filter_is_idempotent() {
        let mut ctl = seeded(6);
        let id = ctl.items()[4].id();
        ctl.toggle_active(id);

        ctl.set_status_filter(StatusFilter::Active);
        let first = ctl.view();
        ctl.set_status_filter(StatusFilter::Active);
        let second = ctl.view();

        assert_eq!(first, second);
        assert_eq!(first.filtered_count, 5);
    }

    #[test]
    fn empty_filtered_set_shows_page_one_of_zero() {
        let mut ctl = seeded(5);
        ctl.set_search_term("ничего похожего");
        let view = ctl.view();
        assert!(view.rows.is_empty());
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 0);
    }

    #[test]
    fn narrowing_filter_clamps_page_down() {
        let mut ctl = seeded(10);
        for item in ctl.items().iter().skip(7).map(|i| i.id()).collect::<Vec<_>>() {
            ctl.toggle_active(item);
        }
        ctl.set_page(2);
        assert_eq!(ctl.page(), 2);

        // Осталась одна страница неактивных, текущая страница съезжает вниз
        ctl.set_status_filter(StatusFilter::Inactive);
        let view = ctl.view();
        assert_eq!(view.page, 1);
        assert_eq!(view.filtered_count, 3);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn deleting_last_row_of_last_page_clamps_page() {
        let mut ctl = seeded(8);
        let last_id = ctl.items()[7].id();
        ctl.toggle_active(last_id);
        ctl.set_page(2);

        ctl.request_delete(last_id);
        ctl.confirm_delete();

        assert_eq!(ctl.page(), 1);
        assert_eq!(ctl.view().rows.len(), 7);
    }

    #[test]
    fn set_page_clamps_to_valid_range() {
        let mut ctl = seeded(10);
        ctl.set_page(99);
        assert_eq!(ctl.page(), 2);
        ctl.set_page(0);
        assert_eq!(ctl.page(), 1);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut ctl = seeded(10);
        ctl.set_page(2);
        ctl.set_page_size(25);
        let view = ctl.view();
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.rows.len(), 10);
    }

    #[test]
    fn toggle_on_inactive_item_only_flips_activity() {
        let mut ctl = seeded(3);
        let id = ctl.items()[1].id();
        ctl.toggle_active(id);

        let before = ctl.find(id).unwrap().clone();
        assert!(!before.is_active());

        let notice = ctl.toggle_active(id).unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);

        let after = ctl.find(id).unwrap();
        assert!(after.is_active());
        assert_eq!(after.name, before.name);
        assert_eq!(after.description, before.description);
        assert_eq!(after.image_url, before.image_url);
        assert_eq!(after.id(), before.id());
    }

    #[test]
    fn toggle_sort_flips_direction_and_resets_page() {
        let mut ctl = seeded(10);
        ctl.set_page(2);

        ctl.toggle_sort("name");
        assert_eq!(
            ctl.sort(),
            Some(SortOrder {
                field: "name",
                ascending: true
            })
        );
        assert_eq!(ctl.page(), 1);

        ctl.toggle_sort("name");
        assert_eq!(
            ctl.sort(),
            Some(SortOrder {
                field: "name",
                ascending: false
            })
        );
        let view = ctl.view();
        assert_eq!(view.rows[0].name, "Категория 10");

        ctl.toggle_sort("created_at");
        assert_eq!(
            ctl.sort(),
            Some(SortOrder {
                field: "created_at",
                ascending: true
            })
        );
    }

    #[test]
    fn view_is_pure() {
        let ctl = seeded(9);
        let version = ctl.version();
        let first = ctl.view();
        let second = ctl.view();
        assert_eq!(first, second);
        assert_eq!(ctl.version(), version);
    }

    #[test]
    fn filtered_rows_span_all_pages_and_respect_filter_and_sort() {
        let mut ctl = seeded(10);
        ctl.toggle_sort("name");
        ctl.toggle_sort("name");
        ctl.set_page(2);

        let rows = ctl.filtered_rows();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].name, "Категория 10");

        ctl.set_search_term("Категория 03");
        let rows = ctl.filtered_rows();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn reload_replaces_items_and_resets_state() {
        let mut ctl = seeded(5);
        ctl.set_search_term("категория");
        ctl.set_status_filter(StatusFilter::Active);
        ctl.toggle_sort("name");
        ctl.open_create();

        ctl.reload(vec![category("Свежая", true)]);

        assert_eq!(ctl.len(), 1);
        assert_eq!(ctl.search_term(), "");
        assert_eq!(ctl.status_filter(), StatusFilter::All);
        assert!(ctl.sort().is_none());
        assert_eq!(*ctl.modal(), ModalState::Closed);
        assert_eq!(ctl.page(), 1);
    }

    #[test]
    fn protected_role_rejects_edit_delete_and_toggle() {
        let admin = Role::new(
            "Администратор".to_string(),
            "Полный доступ".to_string(),
            vec!["roles".to_string(), "users".to_string()],
        );
        let ordinary = Role::new("Кладовщик".to_string(), "Склад".to_string(), vec![]);
        let admin_id = admin.id();

        let mut ctl = EntityListController::new(vec![admin, ordinary]);

        let notice = ctl.open_edit(admin_id).unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.message, MSG_PROTECTED);
        assert_eq!(*ctl.modal(), ModalState::Closed);

        let notice = ctl.request_delete(admin_id).unwrap();
        assert_eq!(notice.message, MSG_PROTECTED);
        assert!(ctl.delete_target().is_none());

        let notice = ctl.toggle_active(admin_id).unwrap();
        assert_eq!(notice.message, MSG_PROTECTED);
        assert!(ctl.find(admin_id).unwrap().is_active());
        assert_eq!(ctl.len(), 2);
    }
}
