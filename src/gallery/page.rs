//! HTML document template for the gallery page

pub(super) const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">

<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Packages</title>
    <style>
        body {
            font-family: Arial, Helvetica, sans-serif;
            background-color: #18181b;
            color: #f4f4f5;
            margin: 0;
            padding: 2rem;
        }

        .container {
            max-width: 960px;
            margin: 0 auto;
        }

        h2 {
            margin: 0;
            padding: 10px 0;
        }

        .package-scroll-container {
            max-height: 80vh;
            overflow-y: auto;
            padding: 10px 4px;
        }

        #package-list {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
            gap: 1rem;
        }

        .package-card {
            display: block;
            padding: 1rem;
            border-radius: 8px;
            background-color: #27272a;
            text-decoration: none;
            color: #f4f4f5;
            transition: transform 0.3s;
        }

        .package-card:hover {
            transform: translateY(-5px);
        }

        .package-name {
            font-weight: bold;
            margin-bottom: 0.5rem;
            overflow-wrap: anywhere;
        }

        .package-meta {
            display: flex;
            justify-content: space-between;
            align-items: center;
        }

        .package-info {
            display: flex;
            flex-direction: column;
            font-size: 0.85rem;
            color: #a1a1aa;
        }

        .package-size {
            background-color: var(--size-bg-color, #3f3f46);
            color: var(--size-text-color, #f4f4f5);
            padding: 0.25rem 0.6rem;
            border-radius: 999px;
            font-size: 0.85rem;
            white-space: nowrap;
        }

        .card-fly-in {
            animation: fly-in 0.6s ease-out both;
        }

        .from-left { --fly-from: translateX(-40px); }
        .from-right { --fly-from: translateX(40px); }
        .from-top { --fly-from: translateY(-40px); }
        .from-bottom { --fly-from: translateY(40px); }

        @keyframes fly-in {
            from {
                opacity: 0;
                transform: var(--fly-from, none);
            }
            to {
                opacity: 1;
                transform: none;
            }
        }

        .loading-text {
            color: #a1a1aa;
        }
    </style>
</head>

<body>
    <div class="container">
        <h2>Packages</h2>
        <div class="package-scroll-container">
            <div id="package-list">
"#;

pub(super) const PAGE_TAIL: &str = r#"            </div>
        </div>
    </div>
</body>

</html>
"#;
