//! In-memory repositories for service tests.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::{
    domain::{
        authentication::{entities::Session, ports::SessionRepository, value_objects::Identity},
        common::{entities::app_errors::CoreError, services::Service},
        crypto::ports::HasherRepository,
        health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
        meal::{entities::Meal, ports::MealRepository, value_objects::MealEntry},
        rating::{
            entities::Rating,
            ports::RatingRepository,
            value_objects::{RatedRecipe, RatingSummary, RecipeReview},
        },
        recipe::{
            entities::Recipe,
            ports::RecipeRepository,
            value_objects::{PageRequest, RecipeLookup, RecipeSearchFilter},
        },
        user::{entities::User, ports::UserRepository},
    },
    infrastructure::jwt::repositories::keystore_repository::JwtKeyStoreRepository,
};

pub type FakeService<H = PlainHasher> =
    Service<FakeStore, FakeStore, H, JwtKeyStoreRepository, FakeStore, FakeStore, FakeStore, FakeStore>;

pub fn fake_service() -> (FakeService, FakeStore) {
    service_with_hasher(PlainHasher)
}

pub fn service_with_hasher<H: HasherRepository>(hasher: H) -> (FakeService<H>, FakeStore) {
    let store = FakeStore::default();
    let service = Service::new(
        store.clone(),
        store.clone(),
        hasher,
        JwtKeyStoreRepository::new("test-secret"),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        Duration::hours(1),
    );

    (service, store)
}

/// Stores passwords as `plain:<password>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHasher;

impl HasherRepository for PlainHasher {
    fn hash_password(&self, password: &str) -> Result<String, CoreError> {
        Ok(format!("plain:{password}"))
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool, CoreError> {
        Ok(password_hash.strip_prefix("plain:") == Some(password))
    }
}

#[derive(Default)]
struct State {
    users: Vec<(User, String)>,
    sessions: Vec<Session>,
    recipes: Vec<Recipe>,
    meals: Vec<Meal>,
    ratings: Vec<Rating>,
    /// Stored right before the next `create_rating`, as if another request
    /// won the race.
    competing_ratings: Vec<Rating>,
}

#[derive(Clone, Default)]
pub struct FakeStore {
    state: Arc<Mutex<State>>,
}

impl FakeStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("fake store lock poisoned")
    }

    pub fn insert_user(&self, username: &str, is_admin: bool) -> Identity {
        let mut user = User::new(username.to_string(), format!("{username}@example.com"));
        user.is_admin = is_admin;
        let session = Session::new(user.id, Duration::hours(1));

        let mut state = self.lock();
        state.users.push((user.clone(), "plain:password".to_string()));
        state.sessions.push(session.clone());

        Identity {
            user,
            session_id: session.id,
        }
    }

    pub fn insert_recipe(&self, recipe: Recipe) -> Recipe {
        self.lock().recipes.push(recipe.clone());
        recipe
    }

    pub fn insert_rating(&self, user_id: Uuid, recipe_id: Uuid, score: f64) -> Rating {
        let rating = Rating::new(user_id, recipe_id, score, None);
        self.lock().ratings.push(rating.clone());
        rating
    }

    pub fn race_next_rating(&self, user_id: Uuid, recipe_id: Uuid, score: f64) -> Rating {
        let rating = Rating::new(user_id, recipe_id, score, None);
        self.lock().competing_ratings.push(rating.clone());
        rating
    }

    pub fn insert_meal(&self, user_id: Uuid, recipe_id: Uuid) -> Meal {
        let meal = Meal::new(user_id, recipe_id);
        self.lock().meals.push(meal.clone());
        meal
    }

    pub fn recipe(&self, recipe_id: Uuid) -> Option<Recipe> {
        self.lock().recipes.iter().find(|r| r.id == recipe_id).cloned()
    }

    pub fn users_count(&self) -> usize {
        self.lock().users.len()
    }

    pub fn ratings_count(&self) -> usize {
        self.lock().ratings.len()
    }
}

fn newest_first(recipes: &mut [Recipe]) {
    recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

impl State {
    fn recipe(&self, recipe_id: Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == recipe_id)
    }

    fn username(&self, user_id: Uuid) -> String {
        self.users
            .iter()
            .find(|(u, _)| u.id == user_id)
            .map(|(u, _)| u.username.clone())
            .unwrap_or_default()
    }
}

impl UserRepository for FakeStore {
    async fn create_user(&self, user: User, password_hash: String) -> Result<User, CoreError> {
        self.lock().users.push((user.clone(), password_hash));
        Ok(user)
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.id == user_id)
            .map(|(u, _)| u.clone()))
    }

    async fn get_by_username(&self, username: String) -> Result<Option<User>, CoreError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.clone()))
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn get_password_hash(&self, user_id: Uuid) -> Result<Option<String>, CoreError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.id == user_id)
            .map(|(_, hash)| hash.clone()))
    }
}

impl SessionRepository for FakeStore {
    async fn create_session(&self, session: Session) -> Result<Session, CoreError> {
        self.lock().sessions.push(session.clone());
        Ok(session)
    }

    async fn get_by_id(&self, session_id: Uuid) -> Result<Option<Session>, CoreError> {
        Ok(self
            .lock()
            .sessions
            .iter()
            .find(|s| s.id == session_id)
            .cloned())
    }

    async fn revoke_session(
        &self,
        session_id: Uuid,
        revoked_at: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        if let Some(session) = self
            .lock()
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id && s.revoked_at.is_none())
        {
            session.revoked_at = Some(revoked_at);
        }
        Ok(())
    }
}

impl RecipeRepository for FakeStore {
    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        Ok(self.insert_recipe(recipe))
    }

    async fn update_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let mut state = self.lock();
        let stored = state
            .recipes
            .iter_mut()
            .find(|r| r.id == recipe.id)
            .ok_or(CoreError::NotFound)?;
        *stored = recipe.clone();
        Ok(recipe)
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        Ok(self.recipe(recipe_id))
    }

    async fn search_recipes(
        &self,
        filter: RecipeSearchFilter,
        page: PageRequest,
    ) -> Result<(Vec<Recipe>, u64), CoreError> {
        let mut found: Vec<Recipe> = self
            .lock()
            .recipes
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        newest_first(&mut found);

        let total = found.len() as u64;
        let items = found
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .collect();

        Ok((items, total))
    }

    async fn fetch_newest(&self, limit: u64) -> Result<Vec<Recipe>, CoreError> {
        let mut recipes = self.lock().recipes.clone();
        newest_first(&mut recipes);
        recipes.truncate(limit as usize);
        Ok(recipes)
    }

    async fn fetch_popular(&self, limit: u64) -> Result<Vec<Recipe>, CoreError> {
        let state = self.lock();
        let mut ranked: Vec<(Option<f64>, Recipe)> = state
            .recipes
            .iter()
            .map(|recipe| {
                let summary = RatingSummary::from_scores(
                    state
                        .ratings
                        .iter()
                        .filter(|r| r.recipe_id == recipe.id)
                        .map(|r| r.score),
                );
                let average = (summary.rating_count > 0).then_some(summary.average_rating);
                (average, recipe.clone())
            })
            .collect();

        ranked.sort_by(|(a_avg, a), (b_avg, b)| {
            let by_average = match (a_avg, b_avg) {
                (Some(a_avg), Some(b_avg)) => b_avg.total_cmp(a_avg),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            };
            by_average.then(b.created_at.cmp(&a.created_at))
        });

        Ok(ranked
            .into_iter()
            .take(limit as usize)
            .map(|(_, recipe)| recipe)
            .collect())
    }

    async fn fetch_by_tags(
        &self,
        tags: Vec<String>,
        exclude_ids: Vec<Uuid>,
        limit: Option<u64>,
    ) -> Result<Vec<Recipe>, CoreError> {
        let mut found: Vec<Recipe> = self
            .lock()
            .recipes
            .iter()
            .filter(|r| !exclude_ids.contains(&r.id))
            .filter(|r| tags.iter().any(|tag| r.has_tag(tag)))
            .cloned()
            .collect();
        newest_first(&mut found);
        if let Some(limit) = limit {
            found.truncate(limit as usize);
        }
        Ok(found)
    }

    async fn search_by_name(
        &self,
        query: String,
        limit: u64,
    ) -> Result<Vec<RecipeLookup>, CoreError> {
        let mut found: Vec<RecipeLookup> = self
            .lock()
            .recipes
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .map(|r| RecipeLookup {
                id: r.id,
                name: r.name.clone(),
            })
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found.truncate(limit as usize);
        Ok(found)
    }
}

impl MealRepository for FakeStore {
    async fn create_meal(&self, meal: Meal) -> Result<Meal, CoreError> {
        self.lock().meals.push(meal.clone());
        Ok(meal)
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<MealEntry>, CoreError> {
        let state = self.lock();
        let mut entries: Vec<MealEntry> = state
            .meals
            .iter()
            .filter(|m| m.user_id == user_id)
            .filter_map(|meal| {
                state.recipe(meal.recipe_id).map(|recipe| MealEntry {
                    meal: meal.clone(),
                    recipe: recipe.clone(),
                })
            })
            .collect();
        entries.sort_by(|a, b| b.meal.logged_at.cmp(&a.meal.logged_at));
        Ok(entries)
    }
}

impl RatingRepository for FakeStore {
    async fn create_rating(&self, rating: Rating) -> Result<Rating, CoreError> {
        let mut state = self.lock();
        let competing = std::mem::take(&mut state.competing_ratings);
        state.ratings.extend(competing);

        let exists = state
            .ratings
            .iter()
            .any(|r| r.user_id == rating.user_id && r.recipe_id == rating.recipe_id);
        if exists {
            return Err(CoreError::AlreadyRated);
        }
        state.ratings.push(rating.clone());
        Ok(rating)
    }

    async fn update_rating(&self, rating: Rating) -> Result<Rating, CoreError> {
        let mut state = self.lock();
        let stored = state
            .ratings
            .iter_mut()
            .find(|r| r.id == rating.id)
            .ok_or(CoreError::NotFound)?;
        *stored = rating.clone();
        Ok(rating)
    }

    async fn get_by_user_and_recipe(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<Option<Rating>, CoreError> {
        Ok(self
            .lock()
            .ratings
            .iter()
            .find(|r| r.user_id == user_id && r.recipe_id == recipe_id)
            .cloned())
    }

    async fn get_reviews_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<RecipeReview>, CoreError> {
        let state = self.lock();
        let mut reviews: Vec<RecipeReview> = state
            .ratings
            .iter()
            .filter(|r| r.recipe_id == recipe_id)
            .map(|rating| RecipeReview {
                rating: rating.clone(),
                username: state.username(rating.user_id),
            })
            .collect();
        reviews.sort_by(|a, b| b.rating.rated_at.cmp(&a.rating.rated_at));
        Ok(reviews)
    }

    async fn get_by_recipes(&self, recipe_ids: Vec<Uuid>) -> Result<Vec<Rating>, CoreError> {
        Ok(self
            .lock()
            .ratings
            .iter()
            .filter(|r| recipe_ids.contains(&r.recipe_id))
            .cloned()
            .collect())
    }

    async fn get_by_user_with_recipes(&self, user_id: Uuid) -> Result<Vec<RatedRecipe>, CoreError> {
        let state = self.lock();
        let mut rated: Vec<RatedRecipe> = state
            .ratings
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter_map(|rating| {
                state.recipe(rating.recipe_id).map(|recipe| RatedRecipe {
                    rating: rating.clone(),
                    recipe: recipe.clone(),
                })
            })
            .collect();
        rated.sort_by(|a, b| b.rating.rated_at.cmp(&a.rating.rated_at));
        Ok(rated)
    }
}

impl HealthCheckRepository for FakeStore {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus::up(0))
    }

    async fn health(&self) -> Result<u64, CoreError> {
        Ok(0)
    }
}
