use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbBackend, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Statement,
    sea_query::{Alias, Expr, Func, LikeExpr, SimpleExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            entities::Recipe,
            ports::RecipeRepository,
            value_objects::{PageRequest, RecipeLookup, RecipeSearchFilter},
        },
    },
    entity::recipes::{ActiveModel, Column, Entity},
};

const POPULAR_RECIPES_SQL: &str = r#"
    SELECT r.*
    FROM recipes r
    LEFT JOIN ratings rt ON rt.recipe_id = r.id
    GROUP BY r.id
    ORDER BY AVG(rt.score) DESC NULLS LAST, r.created_at DESC
    LIMIT $1
"#;

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Lowercases `value` and escapes its LIKE wildcards.
fn escape_like(value: &str) -> String {
    value
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// `%needle%` with LIKE wildcards in `needle` escaped.
fn contains_pattern(needle: &str) -> String {
    format!("%{}%", escape_like(needle))
}

/// Case-insensitive substring match on a text column.
fn icontains(column: Column, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((Entity, column))))
        .like(LikeExpr::new(contains_pattern(needle)).escape('\\'))
}

/// Exact match of one normalized tag against the `"a, b"` tag column.
fn has_tag(tag: &str) -> SimpleExpr {
    let wrapped_tags = Func::cust(Alias::new("concat"))
        .arg(Expr::val(", "))
        .arg(Expr::col((Entity, Column::Tags)))
        .arg(Expr::val(","));

    Expr::expr(wrapped_tags)
        .like(LikeExpr::new(format!("%, {},%", escape_like(tag))).escape('\\'))
}

fn search_condition(filter: &RecipeSearchFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(query) = &filter.query {
        condition = condition.add(
            Condition::any()
                .add(icontains(Column::Name, query))
                .add(icontains(Column::Ingredients, query)),
        );
    }

    for tag in &filter.tags {
        condition = condition.add(icontains(Column::Tags, tag));
    }

    if let Some(min_protein) = filter.min_protein {
        condition = condition.add(Column::Protein.gte(min_protein));
    }

    if let Some(max_calories) = filter.max_calories {
        condition = condition.add(Column::Calories.lte(max_calories));
    }

    condition
}

fn search_query(filter: &RecipeSearchFilter) -> Select<Entity> {
    Entity::find()
        .filter(search_condition(filter))
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
}

fn tags_query(tags: &[String], exclude_ids: Vec<Uuid>, limit: Option<u64>) -> Select<Entity> {
    let any_tag = tags
        .iter()
        .fold(Condition::any(), |condition, tag| condition.add(has_tag(tag)));

    let mut query = Entity::find().filter(any_tag);
    if !exclude_ids.is_empty() {
        query = query.filter(Column::Id.is_not_in(exclude_ids));
    }

    query.order_by_desc(Column::CreatedAt).limit(limit)
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let created = Entity::insert(ActiveModel::from(recipe))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Recipe::from(created))
    }

    async fn update_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let updated = ActiveModel::from(recipe)
            .update(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Recipe::from(updated))
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let recipe = Entity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(recipe.map(Recipe::from))
    }

    async fn search_recipes(
        &self,
        filter: RecipeSearchFilter,
        page: PageRequest,
    ) -> Result<(Vec<Recipe>, u64), CoreError> {
        let paginator = search_query(&filter).paginate(&self.db, page.per_page);

        let total_items = paginator.num_items().await.map_err(|e| {
            error!("Failed to count recipes: {}", e);
            CoreError::InternalServerError
        })?;

        let recipes = paginator.fetch_page(page.page - 1).await.map_err(|e| {
            error!("Failed to search recipes: {}", e);
            CoreError::InternalServerError
        })?;

        Ok((recipes.into_iter().map(Recipe::from).collect(), total_items))
    }

    async fn fetch_newest(&self, limit: u64) -> Result<Vec<Recipe>, CoreError> {
        let recipes = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch newest recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(recipes.into_iter().map(Recipe::from).collect())
    }

    async fn fetch_popular(&self, limit: u64) -> Result<Vec<Recipe>, CoreError> {
        let statement = Statement::from_sql_and_values(
            DbBackend::Postgres,
            POPULAR_RECIPES_SQL,
            [(limit as i64).into()],
        );

        let recipes = Entity::find()
            .from_raw_sql(statement)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch popular recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(recipes.into_iter().map(Recipe::from).collect())
    }

    async fn fetch_by_tags(
        &self,
        tags: Vec<String>,
        exclude_ids: Vec<Uuid>,
        limit: Option<u64>,
    ) -> Result<Vec<Recipe>, CoreError> {
        if tags.is_empty() {
            return Ok(Vec::new());
        }

        let recipes = tags_query(&tags, exclude_ids, limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch recipes by tags: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(recipes.into_iter().map(Recipe::from).collect())
    }

    async fn search_by_name(
        &self,
        query: String,
        limit: u64,
    ) -> Result<Vec<RecipeLookup>, CoreError> {
        let rows = Entity::find()
            .select_only()
            .column(Column::Id)
            .column(Column::Name)
            .filter(icontains(Column::Name, &query))
            .order_by_asc(Column::Name)
            .limit(limit)
            .into_tuple::<(Uuid, String)>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to look up recipes by name: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| RecipeLookup { id, name })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{MockDatabase, QueryTrait, Transaction};

    use super::*;
    use crate::{domain::recipe::entities::sample_recipe, entity::recipes::Model};

    fn postgres_sql(query: Select<Entity>) -> String {
        query.build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(contains_pattern("Soup"), "%soup%");
        assert_eq!(contains_pattern("100%_a\\b"), "%100\\%\\_a\\\\b%");
    }

    #[test]
    fn search_matches_name_or_ingredients_and_every_tag() {
        let filter = RecipeSearchFilter::new(
            Some("Soup".to_string()),
            Some("Vegan, quick".to_string()),
            Some(12.5),
            Some(450.5),
        );

        let sql = postgres_sql(search_query(&filter));

        assert!(sql.contains(r#"LOWER("recipes"."name") LIKE '%soup%'"#), "{sql}");
        assert!(sql.contains(r#"LOWER("recipes"."ingredients") LIKE '%soup%'"#), "{sql}");
        assert!(sql.contains(r#"LOWER("recipes"."tags") LIKE '%vegan%'"#), "{sql}");
        assert!(sql.contains(r#"LOWER("recipes"."tags") LIKE '%quick%'"#), "{sql}");
        assert!(sql.contains(r#""recipes"."protein" >= 12.5"#), "{sql}");
        assert!(sql.contains(r#""recipes"."calories" <= 450.5"#), "{sql}");
        assert!(sql.contains("ESCAPE"), "{sql}");
        // Only the text query is a disjunction, tags are all required.
        assert_eq!(sql.matches(" OR ").count(), 1, "{sql}");
        assert!(sql.contains(r#"ORDER BY "recipes"."created_at" DESC"#), "{sql}");
    }

    #[test]
    fn search_without_criteria_only_orders() {
        let sql = postgres_sql(search_query(&RecipeSearchFilter::default()));

        assert!(!sql.contains("LIKE"), "{sql}");
        assert!(!sql.contains(">="), "{sql}");
    }

    #[test]
    fn tag_lookup_matches_whole_tags_and_excludes_ids() {
        let excluded = Uuid::new_v4();
        let tags = vec!["vegan".to_string(), "gluten free".to_string()];

        let sql = postgres_sql(tags_query(&tags, vec![excluded], Some(4)));

        assert!(sql.contains("LIKE '%, vegan,%'"), "{sql}");
        assert!(sql.contains("LIKE '%, gluten free,%'"), "{sql}");
        assert_eq!(sql.matches(" OR ").count(), 1, "{sql}");
        assert!(sql.contains("NOT IN ("), "{sql}");
        assert!(sql.contains(&excluded.to_string()), "{sql}");
        assert!(sql.contains("LIMIT 4"), "{sql}");
    }

    #[test]
    fn tag_lookup_without_limit_returns_every_match() {
        let sql = postgres_sql(tags_query(&["vegan".to_string()], Vec::new(), None));

        assert!(!sql.contains("LIMIT"), "{sql}");
        assert!(!sql.contains("NOT IN"), "{sql}");
    }

    #[tokio::test]
    async fn popular_recipes_run_the_ranking_query() {
        let recipe = sample_recipe(Uuid::new_v4(), "Chili", "dinner");
        let row = Model {
            id: recipe.id,
            author_id: recipe.author_id,
            name: recipe.name.clone(),
            instructions: recipe.instructions.clone(),
            cooking_time: recipe.cooking_time,
            image_url: recipe.image_url.clone(),
            protein: recipe.protein,
            carbs: recipe.carbs,
            fat: recipe.fat,
            calories: recipe.calories,
            ingredients: recipe.ingredients.clone(),
            tags: recipe.tags.clone(),
            created_at: recipe.created_at.fixed_offset(),
            updated_at: recipe.updated_at.fixed_offset(),
        };
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();
        let repository = PostgresRecipeRepository::new(db.clone());

        let popular = repository.fetch_popular(6).await.unwrap();
        drop(repository);

        assert_eq!(popular, vec![recipe]);
        assert_eq!(
            db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DbBackend::Postgres,
                POPULAR_RECIPES_SQL,
                [6i64.into()],
            )]
        );
        assert!(
            POPULAR_RECIPES_SQL
                .contains("ORDER BY AVG(rt.score) DESC NULLS LAST, r.created_at DESC")
        );
    }
}
