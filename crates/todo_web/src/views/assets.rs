/// Progressive enhancement for delete forms: confirm first, then submit with
/// `fetch` and the async-client header instead of navigating.
pub const APPLICATION_JS: &str = r#"document.addEventListener("DOMContentLoaded", function () {
  document.querySelectorAll("form.delete").forEach(function (form) {
    form.addEventListener("submit", function (event) {
      event.preventDefault();
      event.stopPropagation();

      if (!window.confirm("Are you sure? This cannot be undone!")) {
        return;
      }

      fetch(form.action, {
        method: "POST",
        headers: { "X-Requested-With": "XMLHttpRequest" },
        body: new URLSearchParams(new FormData(form)),
      }).then(function (response) {
        if (response.status === 204) {
          var item = form.closest("li");
          if (item) {
            item.remove();
          }
        } else if (response.ok) {
          window.location = "/lists";
        } else {
          window.location.reload();
        }
      });
    });
  });
});
"#;
