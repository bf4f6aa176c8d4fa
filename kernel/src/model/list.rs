#[derive(Debug)]
pub struct PaginatedList<T> {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<T>,
}

impl<T> PaginatedList<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedList<U> {
        let PaginatedList {
            total,
            limit,
            offset,
            items,
        } = self;
        PaginatedList {
            total,
            limit,
            offset,
            items: items.into_iter().map(f).collect(),
        }
    }
}
