pub(super) const STYLE: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; margin: 0; background: #f0f2f5; color: #1c1e21; }
.container { max-width: 1200px; margin: 0 auto; padding: 20px; }
.header, .session-container { background: #fff; border-radius: 8px; padding: 24px; margin-bottom: 24px; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.1); }
.header h1 { font-size: 28px; margin: 0 0 12px; color: #1877f2; }
.header p { font-size: 16px; line-height: 1.5; white-space: pre-wrap; }
.header a { color: #1877f2; font-weight: bold; text-decoration: none; }
.summary { color: #606770; }
.session-container h2 { font-size: 22px; border-bottom: 1px solid #dddfe2; padding-bottom: 12px; margin: 0 0 20px; }
.photo-count { font-weight: normal; color: #606770; }
.photo-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 12px; }
.photo-tile a { display: block; position: relative; overflow: hidden; border-radius: 8px; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.2); transition: transform 0.2s ease, box-shadow 0.2s ease; }
.photo-tile a:hover { transform: translateY(-4px); box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2); }
.photo-tile img { width: 100%; height: 150px; object-fit: cover; display: block; background-size: cover; background-position: center; }
.photo-overlay { position: absolute; bottom: 0; left: 0; right: 0; background: rgba(0, 0, 0, 0.6); color: #fff; padding: 8px; font-size: 12px; text-align: center; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; opacity: 0; transition: opacity 0.2s ease; }
.photo-tile a:hover .photo-overlay { opacity: 1; }
.lightbox { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.9); display: flex; align-items: center; justify-content: center; z-index: 10; }
.lightbox[hidden] { display: none; }
.lightbox figure { margin: 0; text-align: center; }
.lightbox img { max-width: 90vw; max-height: 85vh; }
.lightbox figcaption { color: #ddd; font-size: 14px; margin-top: 8px; }
.lightbox button { background: none; border: 0; color: #fff; font-size: 48px; cursor: pointer; padding: 0 16px; }
.lightbox-close { position: absolute; top: 8px; right: 8px; }
"#;

pub(super) const LIGHTBOX_SCRIPT: &str = r#"
(function () {
  var links = Array.prototype.slice.call(document.querySelectorAll('.photo-tile a'));
  var box = document.getElementById('lightbox');
  var img = box.querySelector('img');
  var caption = box.querySelector('figcaption');
  var index = -1;

  function show(i) {
    index = (i + links.length) % links.length;
    img.src = links[index].dataset.full;
    caption.textContent = links[index].dataset.caption;
    box.hidden = false;
  }

  function close() {
    box.hidden = true;
    img.removeAttribute('src');
    index = -1;
  }

  links.forEach(function (link, i) {
    link.addEventListener('click', function (e) {
      e.preventDefault();
      show(i);
    });
  });

  box.querySelector('.lightbox-close').addEventListener('click', close);
  box.querySelector('.lightbox-prev').addEventListener('click', function () { show(index - 1); });
  box.querySelector('.lightbox-next').addEventListener('click', function () { show(index + 1); });
  box.addEventListener('click', function (e) { if (e.target === box) close(); });

  document.addEventListener('keydown', function (e) {
    if (box.hidden) return;
    if (e.key === 'Escape') close();
    if (e.key === 'ArrowLeft') show(index - 1);
    if (e.key === 'ArrowRight') show(index + 1);
  });
})();
"#;
