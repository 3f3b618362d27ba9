//! Composition root.
//!
//! [`App`] owns the page state explicitly instead of scattering it across
//! ambient globals: storage, catalog + page cursor, cart, and theme. Each
//! operation maps one user interaction to state mutation, persistence, and
//! render commands, and is the outer error boundary: a propagated fault
//! degrades to an error toast, never a crash.

use tracing::instrument;

use driftline_core::Theme;

use crate::cart::CartStore;
use crate::catalog::{CatalogPager, FixtureCatalog};
use crate::config::LandingConfig;
use crate::contact::{ContactClient, ContactForm};
use crate::error::{AppError, Result};
use crate::models::Product;
use crate::render::{RenderCommand, Renderer, ToastLevel};
use crate::storage::Storage;
use crate::theme::ThemeStore;

/// The landing page's state container and operation surface.
pub struct App<S, R>
where
    S: Storage,
    R: Renderer,
{
    config: LandingConfig,
    storage: S,
    renderer: R,
    catalog: FixtureCatalog,
    pager: CatalogPager,
    cart: CartStore,
    theme: ThemeStore,
    contact: ContactClient,
}

impl<S, R> App<S, R>
where
    S: Storage,
    R: Renderer,
{
    /// Initialize the page: load persisted state (fail-closed) and emit the
    /// first render commands for the theme, cart badge, and load-more
    /// control.
    pub fn new(config: LandingConfig, storage: S, mut renderer: R) -> Self {
        let cart = CartStore::load(&storage);
        let theme = ThemeStore::load(&storage);
        let catalog = FixtureCatalog::new(config.page_size, config.fetch_delay);
        let pager = CatalogPager::new(config.page_cutoff);
        let contact = ContactClient::new(config.send_delay);

        renderer.apply(RenderCommand::ApplyTheme(theme.current()));
        renderer.apply(RenderCommand::UpdateCartCount(cart.total_item_count()));
        renderer.apply(RenderCommand::SetLoadMoreVisible(pager.has_more()));

        Self {
            config,
            storage,
            renderer,
            catalog,
            pager,
            cart,
            theme,
            contact,
        }
    }

    /// Fetch and render the next catalog page.
    ///
    /// On a transient fetch failure the cursor stays put (repeating the
    /// action retries the same page), catalog and cart state are untouched,
    /// and the user sees an error toast.
    #[instrument(skip(self), fields(page = self.pager.next_page()))]
    pub async fn load_more(&mut self) {
        if let Err(e) = self.try_load_more().await {
            self.report(e);
        }
    }

    async fn try_load_more(&mut self) -> Result<()> {
        match self.pager.load_more(&self.catalog).await? {
            Some(batch) => {
                self.renderer.apply(RenderCommand::RenderProducts(batch));
                if !self.pager.has_more() {
                    self.renderer
                        .apply(RenderCommand::SetLoadMoreVisible(false));
                }
            }
            None => {
                // Reachable despite the hidden control (keyboard, stale DOM).
                self.renderer
                    .apply(RenderCommand::SetLoadMoreVisible(false));
                self.renderer.apply(RenderCommand::ShowToast {
                    level: ToastLevel::Info,
                    message: "That's everything in the collection.".to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Add a product to the cart, persist, and refresh the badge.
    #[instrument(skip(self, product), fields(product = %product.id))]
    pub fn add_to_cart(&mut self, product: Product) {
        let name = product.name.clone();
        self.cart.add_product(product, &mut self.storage);
        self.renderer
            .apply(RenderCommand::UpdateCartCount(self.cart.total_item_count()));
        self.renderer.apply(RenderCommand::ShowToast {
            level: ToastLevel::Success,
            message: format!("Added {name} to your cart."),
        });
    }

    /// Apply and persist a theme.
    #[instrument(skip(self))]
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme.set(theme, &mut self.storage);
        self.renderer.apply(RenderCommand::ApplyTheme(theme));
    }

    /// Flip between light and dark.
    #[instrument(skip(self))]
    pub fn toggle_theme(&mut self) {
        let applied = self.theme.toggle(&mut self.storage);
        self.renderer.apply(RenderCommand::ApplyTheme(applied));
    }

    /// Apply a theme named by an untrusted string (e.g. a UI attribute).
    ///
    /// Anything other than `"light"` or `"dark"` fails loudly: nothing is
    /// applied or persisted, and the user sees the rejection. Returns whether
    /// the theme was applied.
    #[instrument(skip(self))]
    pub fn set_theme_from(&mut self, raw: &str) -> bool {
        match raw.parse::<Theme>() {
            Ok(theme) => {
                self.set_theme(theme);
                true
            }
            Err(e) => {
                self.report(AppError::from(e));
                false
            }
        }
    }

    /// Validate and submit the contact form.
    ///
    /// Validation failure marks every violated field inline and skips the
    /// send entirely; it is expected user input, not an error. Returns
    /// whether the message was sent.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn submit_contact(&mut self, form: &ContactForm) -> bool {
        self.renderer.apply(RenderCommand::ClearFieldMarks);

        let violations = form.validate();
        if !violations.is_empty() {
            for violation in violations {
                self.renderer.apply(RenderCommand::MarkFieldInvalid {
                    field: violation.field,
                    message: violation.message.to_owned(),
                });
            }
            return false;
        }

        match self.contact.send(form).await {
            Ok(()) => {
                self.renderer.apply(RenderCommand::ShowToast {
                    level: ToastLevel::Success,
                    message: "Thanks for reaching out. We'll be in touch.".to_owned(),
                });
                true
            }
            Err(e) => {
                self.report(AppError::from(e));
                false
            }
        }
    }

    /// Log a propagated fault and degrade to an error toast.
    fn report(&mut self, err: AppError) {
        tracing::error!(error = %err, "operation failed");
        self.renderer.apply(RenderCommand::ShowToast {
            level: ToastLevel::Error,
            message: err.user_message().to_owned(),
        });
    }

    /// The engine configuration.
    #[must_use]
    pub const fn config(&self) -> &LandingConfig {
        &self.config
    }

    /// The cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The theme store.
    #[must_use]
    pub const fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    /// The catalog source (for failure injection in tests and demos).
    #[must_use]
    pub const fn catalog(&self) -> &FixtureCatalog {
        &self.catalog
    }

    /// The contact sender (for failure injection in tests and demos).
    #[must_use]
    pub const fn contact(&self) -> &ContactClient {
        &self.contact
    }

    /// The page cursor.
    #[must_use]
    pub const fn pager(&self) -> &CatalogPager {
        &self.pager
    }

    /// The rendering surface.
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the rendering surface (tests clear the recording
    /// between steps).
    pub const fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The backing storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Tear down into the backing storage, e.g. to restart against it.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}
