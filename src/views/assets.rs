//! Stylesheet and script served under `/assets`.

pub const STYLESHEET: &str = r#":root {
  --bg: #0b0b0f;
  --card: #15151c;
  --border: #2a2a35;
  --fg: #f4f4f5;
  --muted: #a1a1aa;
  --primary: #f4f4f5;
  --primary-fg: #0b0b0f;
  --destructive: #ef4444;
  --link: #60a5fa;
  --radius: 0.5rem;
}
* { box-sizing: border-box; }
body { margin: 0; min-height: 100vh; display: flex; flex-direction: column; background: var(--bg); color: var(--fg); font-family: Inter, system-ui, sans-serif; }
a { color: inherit; }
.container { width: 100%; max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.page { flex: 1; padding-top: 2rem; padding-bottom: 2rem; }
.center { text-align: center; }
.muted { color: var(--muted); }
.small { font-size: 0.875rem; }
.text-error { color: var(--destructive); }
.btn { display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem; padding: 0.5rem 1rem; border-radius: var(--radius); border: 1px solid transparent; background: var(--primary); color: var(--primary-fg); font: inherit; font-weight: 500; text-decoration: none; cursor: pointer; }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn.ghost { background: transparent; color: var(--fg); }
.btn.ghost:hover { background: var(--card); }
.btn.outline { background: transparent; color: var(--fg); border-color: var(--border); }
.btn.block { width: 100%; }
.btn.large { padding: 0.75rem 1.5rem; }
.input { width: 100%; padding: 0.5rem 0.75rem; border-radius: var(--radius); border: 1px solid var(--border); background: transparent; color: var(--fg); font: inherit; }
.card { background: var(--card); border: 1px solid var(--border); border-radius: var(--radius); }
.site-header { position: sticky; top: 0; z-index: 50; border-bottom: 1px solid var(--border); background: rgba(11, 11, 15, 0.9); backdrop-filter: blur(8px); }
.header-bar { display: flex; height: 3.5rem; align-items: center; justify-content: space-between; gap: 1rem; }
.brand { font-size: 1.125rem; font-weight: 700; text-decoration: none; }
.main-nav { display: none; gap: 0.5rem; }
.mobile-menu summary { list-style: none; }
.mobile-nav { position: absolute; left: 0; top: 3.5rem; display: flex; flex-direction: column; gap: 0.5rem; padding: 1rem; background: var(--card); border: 1px solid var(--border); }
@media (min-width: 768px) { .main-nav { display: flex; } .mobile-menu { display: none; } }
.site-footer { margin-top: 2rem; padding: 1rem; border-top: 1px solid var(--border); text-align: center; color: var(--muted); font-size: 0.875rem; }
.site-footer .credit { font-size: 0.75rem; }
.site-footer .credit a:hover { color: var(--fg); }
.page-title { font-size: 1.875rem; font-weight: 700; text-align: center; margin-bottom: 2rem; }
.filters { padding: 1rem; margin-bottom: 2rem; }
.filters-title { font-size: 1.25rem; margin-top: 0; }
.filters-row { display: flex; flex-direction: column; gap: 1rem; }
@media (min-width: 768px) { .filters-row { flex-direction: row; align-items: flex-end; justify-content: space-between; } }
.filters-label { display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem; }
.category-buttons { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.filters-search { min-width: min(100%, 28rem); }
.product-grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); transition: opacity 0.2s; }
.product-grid.placeholder { opacity: 0.6; }
.product-card { display: flex; flex-direction: column; overflow: hidden; }
.card-media { height: 12rem; overflow: hidden; }
.card-media img { width: 100%; height: 100%; object-fit: cover; }
.card-content { flex: 1; padding: 1rem; }
.card-title { margin: 0; font-size: 1.125rem; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.card-description { margin: 0.25rem 0 0; color: var(--muted); font-size: 0.875rem; display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden; }
.card-footer { padding: 0 1rem 1rem; }
.feed-status { padding: 2rem 0; }
.sentinel { display: flex; justify-content: center; }
.loading-more { display: none; align-items: center; gap: 0.5rem; color: var(--muted); }
.sentinel.loading .btn { display: none; }
.sentinel.loading .loading-more { display: inline-flex; }
.spinner { width: 1.5rem; height: 1.5rem; border: 2px solid var(--muted); border-top-color: transparent; border-radius: 50%; animation: spin 0.8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.alert { display: flex; gap: 0.75rem; padding: 1rem; margin-top: 0.5rem; border: 1px solid var(--border); border-radius: var(--radius); }
.alert[hidden] { display: none; }
.alert.destructive { border-color: var(--destructive); color: var(--destructive); }
.alert-title { margin: 0 0 0.25rem; font-size: 1rem; }
.alert-description { margin: 0; font-size: 0.875rem; }
.back { margin-bottom: 1.5rem; }
.product-detail { display: grid; gap: 2rem; }
@media (min-width: 768px) { .product-detail { grid-template-columns: 1fr 1fr; gap: 3rem; } }
.product-media, .product-info { display: flex; flex-direction: column; gap: 1.5rem; }
.hero-image { aspect-ratio: 16 / 9; border-radius: var(--radius); overflow: hidden; background: #f3f4f6; display: flex; align-items: center; justify-content: center; }
.hero-image img { width: 100%; height: 100%; object-fit: contain; }
.specs { padding: 1rem; }
.section-title { font-size: 1.5rem; margin: 0 0 0.75rem; }
.product-name { font-size: 2.25rem; font-weight: 800; margin: 0; }
.lead { font-size: 1.125rem; line-height: 1.7; color: var(--muted); }
.separator { width: 100%; border: 0; border-top: 1px solid var(--border); }
.buy-links { display: flex; flex-direction: column; gap: 0.75rem; }
.rich-text .rt-h1 { font-size: 2.25rem; font-weight: 700; }
.rich-text .rt-h2 { font-size: 1.5rem; font-weight: 700; }
.rich-text .rt-h3 { font-size: 1.25rem; font-weight: 700; }
.rich-text .rt-h4 { font-size: 1.125rem; font-weight: 700; }
.rich-text .rt-bold { font-weight: 700; }
.rich-text .rt-p { font-weight: 300; margin-top: 1rem; }
@media (min-width: 1024px) { .rich-text .rt-p { font-size: 1.125rem; } }
.rich-text .rt-link { color: var(--link); cursor: pointer; text-decoration: none; }
.rich-text .rt-link:hover { text-decoration: underline; }
.rich-text .rt-code { background: var(--primary); color: var(--primary-fg); padding: 1rem; border-radius: 0.375rem; overflow-x: auto; width: 100%; }
.rich-text .rt-ul { padding: 0.5rem; }
.rich-text .rt-li { margin-bottom: 0.5rem; font-weight: 300; font-size: 0.875rem; }
.rich-text .rt-image { margin: 1.5rem 0; display: flex; justify-content: center; }
.rich-text .rt-image img { max-width: 100%; object-fit: contain; border-radius: var(--radius); box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3); }
.dialog { width: min(425px, 92vw); padding: 1.5rem; background: var(--card); color: var(--fg); border: 1px solid var(--border); border-radius: var(--radius); }
.dialog::backdrop { background: rgba(0, 0, 0, 0.7); }
.dialog-header { display: flex; align-items: center; justify-content: space-between; }
.dialog-title { margin: 0; font-size: 1.125rem; }
.dialog-body { padding: 1rem 0; max-height: 18rem; overflow: auto; }
.coupon-list { display: flex; flex-direction: column; gap: 0.75rem; }
.coupon { display: flex; flex-direction: column; gap: 0.5rem; padding: 0.625rem; border: 1px solid var(--border); border-radius: 1rem; }
.coupon-row { display: flex; align-items: center; justify-content: space-between; }
.coupon-text { display: flex; flex-direction: column; gap: 0.25rem; }
.coupon-code { font-size: 1.125rem; font-weight: 600; }
.coupon.expired .coupon-code { text-decoration: line-through; color: var(--muted); }
.coupon-expiry { display: flex; align-items: center; gap: 0.25rem; }
"#;

pub const SCRIPT: &str = r#"(() => {
  'use strict';

  document.addEventListener('DOMContentLoaded', () => {
    const catalog = document.getElementById('catalog');
    if (catalog) initCatalog(catalog);
    initCoupons();
  });

  function initCatalog(root) {
    const grid = root.querySelector('#product-grid');
    const input = root.querySelector('#search');
    const form = root.querySelector('.filters-search');
    const delay = Number(root.dataset.debounceMs) || 500;
    let category = root.dataset.category || 'Todas';
    let search = root.dataset.search || '';
    let generation = 0;
    let fetchingNext = false;
    let timer;

    const observer = new IntersectionObserver((entries) => {
      if (entries.some((entry) => entry.isIntersecting)) loadMore();
    }, { threshold: 0 });
    watchSentinel();

    root.querySelectorAll('[data-category]').forEach((button) => {
      button.addEventListener('click', (event) => {
        event.preventDefault();
        if (button.dataset.category === category) return;
        category = button.dataset.category;
        root.querySelectorAll('[data-category]').forEach((other) => {
          other.classList.toggle('active', other === button);
          other.classList.toggle('outline', other !== button);
        });
        form.elements.category.value = category;
        reload();
      });
    });

    input.addEventListener('input', () => {
      clearTimeout(timer);
      timer = setTimeout(() => {
        if (input.value.trim() === search.trim()) return;
        search = input.value;
        reload();
      }, delay);
    });

    root.addEventListener('click', (event) => {
      if (!event.target.closest('[data-load-more]')) return;
      event.preventDefault();
      loadMore();
    });

    function params(page) {
      const query = new URLSearchParams({ category });
      if (search.trim()) query.set('search', search.trim());
      if (page > 1) query.set('page', String(page));
      return query;
    }

    async function fetchPage(page) {
      const response = await fetch('/fragments/products?' + params(page));
      const template = document.createElement('template');
      template.innerHTML = await response.text();
      return template.content;
    }

    async function reload() {
      const current = ++generation;
      grid.classList.add('placeholder');
      history.replaceState(null, '', '/?' + params(1));
      try {
        const content = await fetchPage(1);
        if (current === generation) render(content, true);
      } catch (err) {
        console.error('Falha ao carregar produtos:', err);
      } finally {
        if (current === generation) grid.classList.remove('placeholder');
      }
    }

    async function loadMore() {
      const sentinel = root.querySelector('#feed-sentinel');
      if (!sentinel || fetchingNext) return;
      fetchingNext = true;
      const current = generation;
      sentinel.classList.add('loading');
      try {
        const content = await fetchPage(Number(sentinel.dataset.nextPage));
        if (current === generation) render(content, false);
      } catch (err) {
        console.error('Falha ao carregar mais produtos:', err);
        sentinel.classList.remove('loading');
      } finally {
        fetchingNext = false;
      }
    }

    function render(content, replace) {
      const cards = content.querySelector('[data-role="cards"]');
      const status = content.querySelector('#feed-status');
      if (replace) grid.replaceChildren();
      if (cards) grid.append(...cards.children);
      if (status) root.querySelector('#feed-status').replaceWith(status);
      watchSentinel();
    }

    function watchSentinel() {
      observer.disconnect();
      const sentinel = root.querySelector('#feed-sentinel');
      if (sentinel) observer.observe(sentinel);
    }
  }

  function initCoupons() {
    const dialog = document.getElementById('coupons-dialog');
    const trigger = document.querySelector('[data-open-coupons]');
    if (!dialog || !trigger) return;
    const body = dialog.querySelector('[data-role="coupons"]');
    let loaded = false;

    trigger.addEventListener('click', async () => {
      dialog.showModal();
      if (loaded) return;
      loaded = true;
      try {
        const response = await fetch('/fragments/coupons');
        body.innerHTML = await response.text();
        if (!response.ok) loaded = false;
      } catch (err) {
        loaded = false;
        body.textContent = 'Erro ao carregar cupons: ' + (err.message || 'Erro desconhecido');
      }
    });

    dialog.querySelector('[data-close]').addEventListener('click', () => dialog.close());

    dialog.addEventListener('click', async (event) => {
      const button = event.target.closest('[data-copy]');
      if (!button) return;
      const item = button.closest('.coupon');
      if (button.dataset.expired === 'true') {
        notify(item, 'Este cupom expirou e não pode ser copiado.', true, 3000);
        return;
      }
      try {
        await navigator.clipboard.writeText(button.dataset.copy);
        button.disabled = true;
        button.textContent = 'Copiado!';
        notify(item, 'Cupom copiado com sucesso!', false, 2000);
        setTimeout(() => {
          button.disabled = false;
          button.textContent = 'Copiar';
        }, 2000);
      } catch (err) {
        console.error('Falha ao copiar o cupom:', err);
        notify(item, 'Erro ao copiar o cupom!', true, 3000);
      }
    });
  }

  function notify(item, message, destructive, duration) {
    const alert = item.querySelector('[data-role="alert"]');
    alert.querySelector('[data-role="alert-message"]').textContent = message;
    alert.classList.toggle('destructive', destructive);
    alert.hidden = false;
    clearTimeout(alert.dismissTimer);
    alert.dismissTimer = setTimeout(() => { alert.hidden = true; }, duration);
  }
})();
"#;
