//! Person repository: paged, filtered reads.

use std::future::Future;

use diesel::dsl::{AsSelect, SqlTypeOf, count_star};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel_async::RunQueryDsl;

use crate::model::Person;
use crate::schema::persons::{self, dsl};
use crate::types::{PageRequest, PagedResult, PersonFilter};
use crate::{PgConnection, PgError, PgResult, TRACING_TARGET_QUERY};

/// Boxed `SELECT` of one page of persons.
type PersonPageQuery = persons::BoxedQuery<'static, Pg, SqlTypeOf<AsSelect<Person, Pg>>>;

/// Boxed `SELECT COUNT(*)` over the persons.
type PersonCountQuery = persons::BoxedQuery<'static, Pg, BigInt>;

/// Repository for person reads.
pub trait PersonRepository {
    /// Loads one page of persons matching `filter`, ordered by id.
    ///
    /// The page query and the count query over the same predicate are sent
    /// together on this connection, so the pair costs a single round trip.
    ///
    /// # Errors
    ///
    /// Returns [`PgError::InvalidArgument`] for an invalid `request` without
    /// touching the database, or the storage error of either query.
    fn fetch_person_page(
        &mut self,
        filter: &PersonFilter,
        request: PageRequest,
    ) -> impl Future<Output = PgResult<PagedResult<Person>>> + Send;

    /// Counts the persons matching `filter`.
    fn count_persons(&mut self, filter: &PersonFilter)
    -> impl Future<Output = PgResult<i64>> + Send;
}

impl PersonRepository for PgConnection {
    async fn fetch_person_page(
        &mut self,
        filter: &PersonFilter,
        request: PageRequest,
    ) -> PgResult<PagedResult<Person>> {
        request.validate()?;

        let page_query = person_page_query(filter, &request);
        let count_query = person_count_query(filter);

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            search_term = filter.search_term(),
            offset = request.offset(),
            limit = request.limit(),
            "Fetching person page"
        );

        let (items, total_items) = futures::try_join!(
            page_query.load::<Person>(self),
            count_query.get_result::<i64>(self),
        )
        .map_err(PgError::from)?;

        let page = PagedResult::new(items, total_items, &request)?;

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            total_items = page.total_items,
            returned = page.items.len(),
            current_page = page.current_page,
            total_pages = page.total_pages,
            "Fetched person page"
        );

        Ok(page)
    }

    async fn count_persons(&mut self, filter: &PersonFilter) -> PgResult<i64> {
        let count = person_count_query(filter)
            .get_result(self)
            .await
            .map_err(PgError::from)?;
        Ok(count)
    }
}

/// `first_name LIKE '%term%'` with the term bound, or `None` for an empty filter.
fn first_name_matches(
    filter: &PersonFilter,
) -> Option<diesel::dsl::Like<dsl::first_name, String>> {
    filter
        .like_pattern()
        .map(|pattern| dsl::first_name.like(pattern))
}

/// Builds the page query for `request`: filtered, ordered by id, then offset and limited.
fn person_page_query(filter: &PersonFilter, request: &PageRequest) -> PersonPageQuery {
    let mut query = persons::table
        .order(dsl::id.asc())
        .limit(request.limit())
        .offset(request.offset())
        .select(Person::as_select())
        .into_boxed();

    if let Some(predicate) = first_name_matches(filter) {
        query = query.filter(predicate);
    }

    query
}

/// Builds the count query over the same predicate as [`person_page_query`].
fn person_count_query(filter: &PersonFilter) -> PersonCountQuery {
    let mut query = persons::table.select(count_star()).into_boxed();

    if let Some(predicate) = first_name_matches(filter) {
        query = query.filter(predicate);
    }

    query
}
