use super::html::escape_html;
use super::{is_list_complete, remaining_count, sorted_lists, sorted_todos};
use todo_session::{Flash, TodoList};

pub const SCRIPT_PATH: &str = "/javascripts/application.js";

fn complete_class(complete: bool) -> &'static str {
    if complete {
        " class=\"complete\""
    } else {
        ""
    }
}

fn flash_block(flash: &Flash) -> String {
    let mut out = String::new();
    if let Some(error) = &flash.error {
        out.push_str(&format!(
            "<div class=\"flash error\"><p>{}</p></div>\n",
            escape_html(error)
        ));
    }
    if let Some(success) = &flash.success {
        out.push_str(&format!(
            "<div class=\"flash success\"><p>{}</p></div>\n",
            escape_html(success)
        ));
    }
    out
}

pub fn layout(title: &str, flash: &Flash, content: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <script src="{script}" defer></script>
  </head>
  <body>
    <header>
      <h1><a href="/lists">Todo Tracker</a></h1>
    </header>
    <main>
{flash}{content}
    </main>
  </body>
</html>
"#,
        title = escape_html(title),
        script = SCRIPT_PATH,
        flash = flash_block(flash),
        content = content,
    )
}

pub fn lists_index(flash: &Flash, lists: &[TodoList]) -> String {
    let mut content = String::from(
        "<section id=\"lists\">\n<h2>Lists</h2>\n<a class=\"add\" href=\"/lists/new\">New List</a>\n",
    );

    if lists.is_empty() {
        content.push_str(
            "<p class=\"empty\">You don't have any lists yet. <a href=\"/lists/new\">Create one</a>.</p>\n",
        );
    } else {
        content.push_str("<ul>\n");
        for list in sorted_lists(lists) {
            content.push_str(&format!(
                "<li{class}><a href=\"/lists/{id}\"><h3>{name}</h3><p>{remaining} / {total}</p></a></li>\n",
                class = complete_class(is_list_complete(&list.todos)),
                id = list.id,
                name = escape_html(&list.name),
                remaining = remaining_count(&list.todos),
                total = list.todos.len(),
            ));
        }
        content.push_str("</ul>\n");
    }
    content.push_str("</section>\n");

    layout("Lists", flash, &content)
}

pub fn new_list(flash: &Flash, list_name: &str) -> String {
    let content = format!(
        r#"<form action="/lists" method="post">
  <dl>
    <dt><label for="list_name">Enter the name for your new list:</label></dt>
    <dd><input name="list_name" id="list_name" placeholder="List Name" type="text" value="{value}"></dd>
  </dl>
  <fieldset class="actions">
    <input type="submit" value="Save">
    <a href="/lists">Cancel</a>
  </fieldset>
</form>
"#,
        value = escape_html(list_name),
    );
    layout("New List", flash, &content)
}

pub fn list_detail(flash: &Flash, list: &TodoList, todo: &str) -> String {
    let complete = is_list_complete(&list.todos);
    let mut content = format!(
        r#"<section id="todos"{class}>
<header>
  <h2>{name}</h2>
  <p>{remaining} of {total} remaining</p>
  <ul>
    <li>
      <form action="/lists/{id}/all_completed" method="post">
        <button class="check" type="submit">Complete All</button>
      </form>
    </li>
    <li><a class="edit" href="/lists/{id}/edit">Edit List</a></li>
  </ul>
</header>
<ul>
"#,
        class = complete_class(complete),
        name = escape_html(&list.name),
        remaining = remaining_count(&list.todos),
        total = list.todos.len(),
        id = list.id,
    );

    for (item, index) in sorted_todos(&list.todos) {
        content.push_str(&format!(
            r#"<li{class} data-index="{index}">
  <form action="/lists/{list_id}/todos/{todo_id}" method="post" class="check">
    <input type="hidden" name="completed" value="{completed}">
    <button type="submit">{toggle_label}</button>
  </form>
  <h3>{name}</h3>
  <form action="/lists/{list_id}/todos/{todo_id}/delete" method="post" class="delete">
    <button type="submit">Delete</button>
  </form>
</li>
"#,
            class = complete_class(item.completed),
            index = index,
            list_id = list.id,
            todo_id = item.id,
            completed = item.completed,
            toggle_label = if item.completed { "Undo" } else { "Complete" },
            name = escape_html(&item.name),
        ));
    }

    content.push_str(&format!(
        r#"</ul>
</section>
<form action="/lists/{id}/todos" method="post">
  <dl>
    <dt><label for="todo">Enter a new todo item:</label></dt>
    <dd><input name="todo" id="todo" placeholder="Something to do" type="text" value="{value}"></dd>
  </dl>
  <fieldset class="actions">
    <input type="submit" value="Add">
  </fieldset>
</form>
<a class="list" href="/lists">All Lists</a>
"#,
        id = list.id,
        value = escape_html(todo),
    ));

    layout(&list.name, flash, &content)
}

pub fn edit_list(flash: &Flash, list: &TodoList, new_name: &str) -> String {
    let content = format!(
        r#"<h2>Editing '{name}'</h2>
<form action="/lists/{id}/edit" method="post">
  <dl>
    <dt><label for="new_name">Enter the new name for the list:</label></dt>
    <dd><input name="new_name" id="new_name" placeholder="List Name" type="text" value="{value}"></dd>
  </dl>
  <fieldset class="actions">
    <input type="submit" value="Save">
    <a href="/lists/{id}">Cancel</a>
  </fieldset>
</form>
<form action="/lists/{id}/delete" method="post" class="delete">
  <button type="submit">Delete List</button>
</form>
"#,
        name = escape_html(&list.name),
        id = list.id,
        value = escape_html(new_name),
    );
    layout("Edit List", flash, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_session::Todo;

    fn groceries() -> TodoList {
        TodoList {
            id: 3,
            name: "Groceries".to_string(),
            todos: vec![
                Todo {
                    id: 1,
                    name: "Milk".to_string(),
                    completed: true,
                },
                Todo {
                    id: 4,
                    name: "<Eggs>".to_string(),
                    completed: false,
                },
            ],
        }
    }

    #[test]
    fn test_layout_renders_flash_messages() {
        let flash = Flash {
            error: Some("Bad <input>".to_string()),
            success: None,
        };
        let page = layout("Lists", &flash, "<p>body</p>");
        assert!(page.contains("<div class=\"flash error\"><p>Bad &lt;input&gt;</p></div>"));
        assert!(!page.contains("flash success"));
        assert!(page.contains(SCRIPT_PATH));
    }

    #[test]
    fn test_lists_index_empty_state() {
        let page = lists_index(&Flash::default(), &[]);
        assert!(page.contains("You don't have any lists yet."));
    }

    #[test]
    fn test_lists_index_shows_remaining_over_total() {
        let page = lists_index(&Flash::default(), &[groceries()]);
        assert!(page.contains("href=\"/lists/3\""));
        assert!(page.contains("<p>1 / 2</p>"));
    }

    #[test]
    fn test_list_detail_links_use_todo_ids_and_escape_names() {
        let page = list_detail(&Flash::default(), &groceries(), "");
        assert!(page.contains("action=\"/lists/3/todos/4\""));
        assert!(page.contains("action=\"/lists/3/todos/1/delete\""));
        assert!(page.contains("<h3>&lt;Eggs&gt;</h3>"));
        assert!(page.contains("1 of 2 remaining"));

        // Incomplete todos come first.
        let eggs = page.find("&lt;Eggs&gt;").unwrap();
        let milk = page.find("<h3>Milk</h3>").unwrap();
        assert!(eggs < milk);
    }

    #[test]
    fn test_forms_keep_submitted_values() {
        let page = new_list(&Flash::default(), "Half \"typed\"");
        assert!(page.contains("value=\"Half &quot;typed&quot;\""));

        let page = edit_list(&Flash::default(), &groceries(), "Food");
        assert!(page.contains("Editing 'Groceries'"));
        assert!(page.contains("value=\"Food\""));
        assert!(page.contains("action=\"/lists/3/delete\""));
    }
}
