mod common;

use productos_api::{
    error::AppError,
    models::Producto,
    repository::{PageRequest, ProductoFilter, ProductoQuery, ProductoRepository},
};

use common::memory_repository;

fn query(nombre: Option<&str>, precio_min: Option<f64>, page: i64, size: i64) -> ProductoQuery {
    ProductoQuery {
        filter: ProductoFilter {
            nombre: nombre.map(str::to_string),
            precio_min,
        },
        page: PageRequest::of(page, size).expect("valid page"),
    }
}

async fn seed(repo: &impl ProductoRepository) -> anyhow::Result<()> {
    for producto in [
        Producto::new("Widget A", 10.0, 3),
        Producto::new("widget B", 4.0, 1),
        Producto::new("Gadget", 20.0, 0),
    ] {
        repo.save(producto).await?;
    }
    Ok(())
}

#[tokio::test]
async fn save_assigns_id_then_updates_in_place() -> anyhow::Result<()> {
    let repo = memory_repository().await?;

    let saved = repo.save(Producto::new("Producto de prueba", 10.0, 10)).await?;
    let id = saved.id.expect("id assigned on insert");
    assert_eq!(saved.nombre, "Producto de prueba");

    let mut changed = saved.clone();
    changed.nombre = "Producto de prueba modificado".into();
    let updated = repo.save(changed).await?;

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.nombre, "Producto de prueba modificado");
    assert_eq!(updated.precio, 10.0);
    assert_eq!(updated.stock, 10);
    assert_eq!(repo.find_all().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn find_by_id_and_find_all() -> anyhow::Result<()> {
    let repo = memory_repository().await?;
    seed(&repo).await?;

    let all = repo.find_all().await?;
    let nombres: Vec<_> = all.iter().map(|p| p.nombre.as_str()).collect();
    assert_eq!(nombres, ["Widget A", "widget B", "Gadget"]);

    let gadget = repo.find_by_id(all[2].id.unwrap()).await?.expect("gadget");
    assert_eq!(gadget.precio, 20.0);
    assert_eq!(gadget.imagen, None);

    assert!(repo.find_by_id(9_999).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_then_lookup_is_empty() -> anyhow::Result<()> {
    let repo = memory_repository().await?;
    let saved = repo.save(Producto::new("Efímero", 1.0, 1)).await?;

    repo.delete(&saved).await?;

    assert!(repo.find_by_id(saved.id.unwrap()).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn nombre_contains_ignores_case() -> anyhow::Result<()> {
    let repo = memory_repository().await?;
    seed(&repo).await?;

    let found = repo.find_by_nombre_contains("WIDGET").await?;
    assert_eq!(found.len(), 2);
    assert!(repo.find_by_nombre_contains("zzz").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn like_wildcards_match_literally() -> anyhow::Result<()> {
    let repo = memory_repository().await?;
    repo.save(Producto::new("Descuento 50%", 1.0, 1)).await?;
    repo.save(Producto::new("Descuento 500", 1.0, 1)).await?;

    let found = repo.find_by_nombre_contains("50%").await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].nombre, "Descuento 50%");
    Ok(())
}

#[tokio::test]
async fn find_page_by_nombre_sorts_ascending() -> anyhow::Result<()> {
    let repo = memory_repository().await?;
    seed(&repo).await?;

    let page = repo.find_page(&query(Some("widget"), None, 0, 10)).await?;

    let items: Vec<_> = page
        .content
        .iter()
        .map(|p| (p.nombre.as_str(), p.precio, p.stock))
        .collect();
    assert_eq!(items, [("Widget A", 10.0, 3), ("widget B", 4.0, 1)]);
    assert_eq!(page.total_elements, 2);
    assert_eq!(page.total_pages(), 1);
    assert_eq!(page.number, 0);
    Ok(())
}

#[tokio::test]
async fn find_page_combines_filters() -> anyhow::Result<()> {
    let repo = memory_repository().await?;
    seed(&repo).await?;

    let page = repo.find_page(&query(Some("widget"), Some(5.0), 0, 10)).await?;
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].nombre, "Widget A");

    let page = repo.find_page(&query(None, Some(10.0), 0, 10)).await?;
    let nombres: Vec<_> = page.content.iter().map(|p| p.nombre.as_str()).collect();
    assert_eq!(nombres, ["Gadget", "Widget A"]);
    Ok(())
}

#[tokio::test]
async fn find_page_splits_and_counts_everything() -> anyhow::Result<()> {
    let repo = memory_repository().await?;
    for i in 0..7 {
        repo.save(Producto::new(format!("Item {i}"), i as f64, i)).await?;
    }

    let first = repo.find_page(&query(None, None, 0, 3)).await?;
    assert_eq!(first.content.len(), 3);
    assert_eq!(first.total_elements, 7);
    assert_eq!(first.total_pages(), 3);
    assert_eq!(first.content[0].nombre, "Item 0");

    let last = repo.find_page(&query(None, None, 2, 3)).await?;
    let nombres: Vec<_> = last.content.iter().map(|p| p.nombre.as_str()).collect();
    assert_eq!(nombres, ["Item 6"]);
    assert_eq!(last.number, 2);

    let past_end = repo.find_page(&query(None, None, 5, 3)).await?;
    assert!(past_end.content.is_empty());
    assert_eq!(past_end.total_elements, 7);
    Ok(())
}

#[tokio::test]
async fn nombre_contains_keeps_accented_names() -> anyhow::Result<()> {
    let repo = memory_repository().await?;
    repo.save(Producto::new("Ñandú", 1.0, 1)).await?;
    repo.save(Producto::new("ÓPTICO", 2.0, 2)).await?;

    for nombre in ["Ñandú", "ÑANDú", "andú", "ÓPTICO", "Óptico", "PTIC"] {
        let found = repo.find_by_nombre_contains(nombre).await?;
        assert_eq!(found.len(), 1, "{nombre}");
    }

    let page = repo.find_page(&query(Some("Ñandú"), None, 0, 10)).await?;
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].nombre, "Ñandú");
    Ok(())
}

#[tokio::test]
async fn save_with_unknown_id_is_not_found() -> anyhow::Result<()> {
    let repo = memory_repository().await?;
    let mut producto = Producto::new("Fantasma", 1.0, 1);
    producto.id = Some(999);

    let err = repo.save(producto).await.expect_err("no row with id 999");

    assert!(matches!(err, AppError::ProductoNotFound(999)));
    assert!(repo.find_all().await?.is_empty());
    Ok(())
}
