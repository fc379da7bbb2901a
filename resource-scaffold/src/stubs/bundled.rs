//! Default stub contents shipped with the scaffolder
//!
//! Placeholders use the `{{ key }}` form. Anything else in double braces
//! (Vue interpolation, Blade echo) is left alone by the renderer.

/// Migration creating the resource table
pub const MIGRATION_CREATE_TABLE: &str = r"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{
    /**
     * Run the migrations.
     */
    public function up(): void
    {
        Schema::create('{{ table }}', function (Blueprint $table) {
            $table->id();
            $table->string('name');
            $table->timestamps();
        });
    }

    /**
     * Reverse the migrations.
     */
    public function down(): void
    {
        Schema::dropIfExists('{{ table }}');
    }
};
";

/// Eloquent model
pub const MODEL: &str = r"<?php

namespace {{ modelNamespace }};

use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;

class {{ model }} extends Model
{
    use HasFactory;

    protected $table = '{{ table }}';

    /**
     * The attributes that are mass assignable.
     *
     * @var list<string>
     */
    protected $fillable = [
        'name',
    ];
}
";

/// Inertia controller with index, create and store
pub const CONTROLLER_INERTIA: &str = r"<?php

namespace {{ controllerNamespace }};

use App\Http\Controllers\Controller;
use {{ modelNamespace }}\{{ model }};
use Illuminate\Http\RedirectResponse;
use Illuminate\Http\Request;
use Inertia\Inertia;
use Inertia\Response;

class {{ controllerClass }} extends Controller
{
    public function index(): Response
    {
        return Inertia::render('{{ inertiaIndexComponent }}', [
            'records' => {{ model }}::query()->latest()->paginate(15),
        ]);
    }

    public function create(): Response
    {
        return Inertia::render('{{ inertiaCreateComponent }}');
    }

    public function store(Request $request): RedirectResponse
    {
        $validated = $request->validate([
            'name' => ['required', 'string', 'max:255'],
        ]);

        {{ model }}::create($validated);

        return redirect()->route('{{ routeResource }}.index');
    }
}
";

/// Inertia resource controller
pub const CONTROLLER_INERTIA_RESOURCE: &str = r"<?php

namespace {{ controllerNamespace }};

use App\Http\Controllers\Controller;
use {{ modelNamespace }}\{{ model }};
use Illuminate\Http\RedirectResponse;
use Illuminate\Http\Request;
use Inertia\Inertia;
use Inertia\Response;

class {{ controllerClass }} extends Controller
{
    public function index(): Response
    {
        return Inertia::render('{{ inertiaIndexComponent }}', [
            'records' => {{ model }}::query()->latest()->paginate(15),
        ]);
    }

    public function create(): Response
    {
        return Inertia::render('{{ inertiaCreateComponent }}');
    }

    public function store(Request $request): RedirectResponse
    {
        {{ model }}::create($this->validated($request));

        return redirect()->route('{{ routeResource }}.index');
    }

    public function show({{ model }} ${{ modelVariable }}): Response
    {
        return Inertia::render('{{ inertiaShowComponent }}', [
            'record' => ${{ modelVariable }},
        ]);
    }

    public function edit({{ model }} ${{ modelVariable }}): Response
    {
        return Inertia::render('{{ inertiaEditComponent }}', [
            'record' => ${{ modelVariable }},
        ]);
    }

    public function update(Request $request, {{ model }} ${{ modelVariable }}): RedirectResponse
    {
        ${{ modelVariable }}->update($this->validated($request));

        return redirect()->route('{{ routeResource }}.index');
    }

    public function destroy({{ model }} ${{ modelVariable }}): RedirectResponse
    {
        ${{ modelVariable }}->delete();

        return redirect()->route('{{ routeResource }}.index');
    }

    /**
     * @return array<string, mixed>
     */
    private function validated(Request $request): array
    {
        return $request->validate([
            'name' => ['required', 'string', 'max:255'],
        ]);
    }
}
";

/// Blade controller with index, create and store
pub const CONTROLLER_BLADE: &str = r"<?php

namespace {{ controllerNamespace }};

use App\Http\Controllers\Controller;
use {{ modelNamespace }}\{{ model }};
use Illuminate\Contracts\View\View;
use Illuminate\Http\RedirectResponse;
use Illuminate\Http\Request;

class {{ controllerClass }} extends Controller
{
    public function index(): View
    {
        return view('{{ bladeIndexView }}', [
            'records' => {{ model }}::query()->latest()->paginate(15),
        ]);
    }

    public function create(): View
    {
        return view('{{ bladeCreateView }}');
    }

    public function store(Request $request): RedirectResponse
    {
        $validated = $request->validate([
            'name' => ['required', 'string', 'max:255'],
        ]);

        {{ model }}::create($validated);

        return redirect()->route('{{ routeResource }}.index');
    }
}
";

/// Blade resource controller
pub const CONTROLLER_BLADE_RESOURCE: &str = r"<?php

namespace {{ controllerNamespace }};

use App\Http\Controllers\Controller;
use {{ modelNamespace }}\{{ model }};
use Illuminate\Contracts\View\View;
use Illuminate\Http\RedirectResponse;
use Illuminate\Http\Request;

class {{ controllerClass }} extends Controller
{
    public function index(): View
    {
        return view('{{ bladeIndexView }}', [
            'records' => {{ model }}::query()->latest()->paginate(15),
        ]);
    }

    public function create(): View
    {
        return view('{{ bladeCreateView }}');
    }

    public function store(Request $request): RedirectResponse
    {
        {{ model }}::create($this->validated($request));

        return redirect()->route('{{ routeResource }}.index');
    }

    public function show({{ model }} ${{ modelVariable }}): View
    {
        return view('{{ bladeShowView }}', [
            'record' => ${{ modelVariable }},
        ]);
    }

    public function edit({{ model }} ${{ modelVariable }}): View
    {
        return view('{{ bladeEditView }}', [
            'record' => ${{ modelVariable }},
        ]);
    }

    public function update(Request $request, {{ model }} ${{ modelVariable }}): RedirectResponse
    {
        ${{ modelVariable }}->update($this->validated($request));

        return redirect()->route('{{ routeResource }}.index');
    }

    public function destroy({{ model }} ${{ modelVariable }}): RedirectResponse
    {
        ${{ modelVariable }}->delete();

        return redirect()->route('{{ routeResource }}.index');
    }

    /**
     * @return array<string, mixed>
     */
    private function validated(Request $request): array
    {
        return $request->validate([
            'name' => ['required', 'string', 'max:255'],
        ]);
    }
}
";

/// Inertia index Vue page
pub const INERTIA_INDEX_VUE: &str = r#"<script setup>
import { Head, Link } from '@inertiajs/vue3';

defineProps({
    records: { type: Object, required: true },
});
</script>

<template>
    <Head title="{{ model }}" />

    <div class="mx-auto max-w-5xl p-6">
        <div class="mb-4 flex items-center justify-between">
            <h1 class="text-xl font-semibold">{{ model }}</h1>
            <Link :href="route('{{ routeResource }}.create')">New</Link>
        </div>

        <ul>
            <li v-for="record in records.data" :key="record.id">
                {{ record.name }}
            </li>
        </ul>
    </div>
</template>
"#;

/// Inertia create Vue page
pub const INERTIA_CREATE_VUE: &str = r#"<script setup>
import { Head, useForm } from '@inertiajs/vue3';

const form = useForm({
    name: '',
});

const submit = () => form.post(route('{{ routeResource }}.store'));
</script>

<template>
    <Head title="Create {{ model }}" />

    <form class="mx-auto max-w-xl p-6" @submit.prevent="submit">
        <label for="name">Name</label>
        <input id="name" v-model="form.name" type="text" />
        <div v-if="form.errors.name">{{ form.errors.name }}</div>

        <button type="submit" :disabled="form.processing">Save</button>
    </form>
</template>
"#;

/// Inertia edit Vue page
pub const INERTIA_EDIT_VUE: &str = r#"<script setup>
import { Head, useForm } from '@inertiajs/vue3';

const props = defineProps({
    record: { type: Object, required: true },
});

const form = useForm({
    name: props.record.name,
});

const submit = () => form.put(route('{{ routeResource }}.update', props.record.id));
</script>

<template>
    <Head title="Edit {{ model }}" />

    <form class="mx-auto max-w-xl p-6" @submit.prevent="submit">
        <label for="name">Name</label>
        <input id="name" v-model="form.name" type="text" />
        <div v-if="form.errors.name">{{ form.errors.name }}</div>

        <button type="submit" :disabled="form.processing">Update</button>
    </form>
</template>
"#;

/// Inertia show Vue page
pub const INERTIA_SHOW_VUE: &str = r#"<script setup>
import { Head, Link } from '@inertiajs/vue3';

defineProps({
    record: { type: Object, required: true },
});
</script>

<template>
    <Head title="{{ model }}" />

    <div class="mx-auto max-w-xl p-6">
        <h1 class="text-xl font-semibold">{{ record.name }}</h1>
        <Link :href="route('{{ routeResource }}.index')">Back</Link>
    </div>
</template>
"#;

/// Inertia index Vue page (TypeScript)
pub const INERTIA_INDEX_VUE_TS: &str = r#"<script setup lang="ts">
import { Head, Link } from '@inertiajs/vue3';

interface {{ model }}Record {
    id: number;
    name: string;
}

defineProps<{
    records: { data: {{ model }}Record[] };
}>();
</script>

<template>
    <Head title="{{ model }}" />

    <div class="mx-auto max-w-5xl p-6">
        <div class="mb-4 flex items-center justify-between">
            <h1 class="text-xl font-semibold">{{ model }}</h1>
            <Link :href="route('{{ routeResource }}.create')">New</Link>
        </div>

        <ul>
            <li v-for="record in records.data" :key="record.id">
                {{ record.name }}
            </li>
        </ul>
    </div>
</template>
"#;

/// Inertia create Vue page (TypeScript)
pub const INERTIA_CREATE_VUE_TS: &str = r#"<script setup lang="ts">
import { Head, useForm } from '@inertiajs/vue3';

const form = useForm({
    name: '',
});

const submit = (): void => {
    form.post(route('{{ routeResource }}.store'));
};
</script>

<template>
    <Head title="Create {{ model }}" />

    <form class="mx-auto max-w-xl p-6" @submit.prevent="submit">
        <label for="name">Name</label>
        <input id="name" v-model="form.name" type="text" />
        <div v-if="form.errors.name">{{ form.errors.name }}</div>

        <button type="submit" :disabled="form.processing">Save</button>
    </form>
</template>
"#;

/// Inertia edit Vue page (TypeScript)
pub const INERTIA_EDIT_VUE_TS: &str = r#"<script setup lang="ts">
import { Head, useForm } from '@inertiajs/vue3';

interface {{ model }}Record {
    id: number;
    name: string;
}

const props = defineProps<{
    record: {{ model }}Record;
}>();

const form = useForm({
    name: props.record.name,
});

const submit = (): void => {
    form.put(route('{{ routeResource }}.update', props.record.id));
};
</script>

<template>
    <Head title="Edit {{ model }}" />

    <form class="mx-auto max-w-xl p-6" @submit.prevent="submit">
        <label for="name">Name</label>
        <input id="name" v-model="form.name" type="text" />
        <div v-if="form.errors.name">{{ form.errors.name }}</div>

        <button type="submit" :disabled="form.processing">Update</button>
    </form>
</template>
"#;

/// Inertia show Vue page (TypeScript)
pub const INERTIA_SHOW_VUE_TS: &str = r#"<script setup lang="ts">
import { Head, Link } from '@inertiajs/vue3';

interface {{ model }}Record {
    id: number;
    name: string;
}

defineProps<{
    record: {{ model }}Record;
}>();
</script>

<template>
    <Head title="{{ model }}" />

    <div class="mx-auto max-w-xl p-6">
        <h1 class="text-xl font-semibold">{{ record.name }}</h1>
        <Link :href="route('{{ routeResource }}.index')">Back</Link>
    </div>
</template>
"#;

/// Inertia index React page
pub const INERTIA_INDEX_REACT_JSX: &str = r#"import { Head, Link } from '@inertiajs/react';

export default function Index({ records }) {
    return (
        <div className="mx-auto max-w-5xl p-6">
            <Head title="{{ model }}" />

            <div className="mb-4 flex items-center justify-between">
                <h1 className="text-xl font-semibold">{{ model }}</h1>
                <Link href={route('{{ routeResource }}.create')}>New</Link>
            </div>

            <ul>
                {records.data.map((record) => (
                    <li key={record.id}>{record.name}</li>
                ))}
            </ul>
        </div>
    );
}
"#;

/// Inertia create React page
pub const INERTIA_CREATE_REACT_JSX: &str = r#"import { Head, useForm } from '@inertiajs/react';

export default function Create() {
    const { data, setData, post, processing, errors } = useForm({
        name: '',
    });

    const submit = (e) => {
        e.preventDefault();
        post(route('{{ routeResource }}.store'));
    };

    return (
        <form className="mx-auto max-w-xl p-6" onSubmit={submit}>
            <Head title="Create {{ model }}" />

            <label htmlFor="name">Name</label>
            <input id="name" value={data.name} onChange={(e) => setData('name', e.target.value)} />
            {errors.name && <div>{errors.name}</div>}

            <button type="submit" disabled={processing}>Save</button>
        </form>
    );
}
"#;

/// Inertia edit React page
pub const INERTIA_EDIT_REACT_JSX: &str = r#"import { Head, useForm } from '@inertiajs/react';

export default function Edit({ record }) {
    const { data, setData, put, processing, errors } = useForm({
        name: record.name,
    });

    const submit = (e) => {
        e.preventDefault();
        put(route('{{ routeResource }}.update', record.id));
    };

    return (
        <form className="mx-auto max-w-xl p-6" onSubmit={submit}>
            <Head title="Edit {{ model }}" />

            <label htmlFor="name">Name</label>
            <input id="name" value={data.name} onChange={(e) => setData('name', e.target.value)} />
            {errors.name && <div>{errors.name}</div>}

            <button type="submit" disabled={processing}>Update</button>
        </form>
    );
}
"#;

/// Inertia show React page
pub const INERTIA_SHOW_REACT_JSX: &str = r#"import { Head, Link } from '@inertiajs/react';

export default function Show({ record }) {
    return (
        <div className="mx-auto max-w-xl p-6">
            <Head title="{{ model }}" />

            <h1 className="text-xl font-semibold">{record.name}</h1>
            <Link href={route('{{ routeResource }}.index')}>Back</Link>
        </div>
    );
}
"#;

/// Inertia index React page (TypeScript)
pub const INERTIA_INDEX_REACT_TSX: &str = r#"import { Head, Link } from '@inertiajs/react';

interface {{ model }}Record {
    id: number;
    name: string;
}

interface Props {
    records: { data: {{ model }}Record[] };
}

export default function Index({ records }: Props) {
    return (
        <div className="mx-auto max-w-5xl p-6">
            <Head title="{{ model }}" />

            <div className="mb-4 flex items-center justify-between">
                <h1 className="text-xl font-semibold">{{ model }}</h1>
                <Link href={route('{{ routeResource }}.create')}>New</Link>
            </div>

            <ul>
                {records.data.map((record) => (
                    <li key={record.id}>{record.name}</li>
                ))}
            </ul>
        </div>
    );
}
"#;

/// Inertia create React page (TypeScript)
pub const INERTIA_CREATE_REACT_TSX: &str = r#"import { Head, useForm } from '@inertiajs/react';
import { FormEvent } from 'react';

export default function Create() {
    const { data, setData, post, processing, errors } = useForm({
        name: '',
    });

    const submit = (e: FormEvent) => {
        e.preventDefault();
        post(route('{{ routeResource }}.store'));
    };

    return (
        <form className="mx-auto max-w-xl p-6" onSubmit={submit}>
            <Head title="Create {{ model }}" />

            <label htmlFor="name">Name</label>
            <input id="name" value={data.name} onChange={(e) => setData('name', e.target.value)} />
            {errors.name && <div>{errors.name}</div>}

            <button type="submit" disabled={processing}>Save</button>
        </form>
    );
}
"#;

/// Inertia edit React page (TypeScript)
pub const INERTIA_EDIT_REACT_TSX: &str = r#"import { Head, useForm } from '@inertiajs/react';
import { FormEvent } from 'react';

interface {{ model }}Record {
    id: number;
    name: string;
}

export default function Edit({ record }: { record: {{ model }}Record }) {
    const { data, setData, put, processing, errors } = useForm({
        name: record.name,
    });

    const submit = (e: FormEvent) => {
        e.preventDefault();
        put(route('{{ routeResource }}.update', record.id));
    };

    return (
        <form className="mx-auto max-w-xl p-6" onSubmit={submit}>
            <Head title="Edit {{ model }}" />

            <label htmlFor="name">Name</label>
            <input id="name" value={data.name} onChange={(e) => setData('name', e.target.value)} />
            {errors.name && <div>{errors.name}</div>}

            <button type="submit" disabled={processing}>Update</button>
        </form>
    );
}
"#;

/// Inertia show React page (TypeScript)
pub const INERTIA_SHOW_REACT_TSX: &str = r#"import { Head, Link } from '@inertiajs/react';

interface {{ model }}Record {
    id: number;
    name: string;
}

export default function Show({ record }: { record: {{ model }}Record }) {
    return (
        <div className="mx-auto max-w-xl p-6">
            <Head title="{{ model }}" />

            <h1 className="text-xl font-semibold">{record.name}</h1>
            <Link href={route('{{ routeResource }}.index')}>Back</Link>
        </div>
    );
}
"#;

/// Blade index view
pub const BLADE_INDEX: &str = r"@extends('layouts.app')

@section('content')
    <div class='mx-auto max-w-5xl p-6'>
        <div class='mb-4 flex items-center justify-between'>
            <h1 class='text-xl font-semibold'>{{ model }}</h1>
            <a href='{{ route('{{ routeResource }}.create') }}'>New</a>
        </div>

        <ul>
            @foreach ($records as $record)
                <li>{{ $record->name }}</li>
            @endforeach
        </ul>

        {{ $records->links() }}
    </div>
@endsection
";

/// Blade create view
pub const BLADE_CREATE: &str = r"@extends('layouts.app')

@section('content')
    <form method='POST' action='{{ route('{{ routeResource }}.store') }}' class='mx-auto max-w-xl p-6'>
        @csrf

        <label for='name'>Name</label>
        <input id='name' name='name' type='text' value='{{ old('name') }}'>
        @error('name')
            <div>{{ $message }}</div>
        @enderror

        <button type='submit'>Save</button>
    </form>
@endsection
";

/// Blade edit view
pub const BLADE_EDIT: &str = r"@extends('layouts.app')

@section('content')
    <form method='POST' action='{{ route('{{ routeResource }}.update', $record) }}' class='mx-auto max-w-xl p-6'>
        @csrf
        @method('PUT')

        <label for='name'>Name</label>
        <input id='name' name='name' type='text' value='{{ old('name', $record->name) }}'>
        @error('name')
            <div>{{ $message }}</div>
        @enderror

        <button type='submit'>Update</button>
    </form>
@endsection
";

/// Blade show view
pub const BLADE_SHOW: &str = r"@extends('layouts.app')

@section('content')
    <div class='mx-auto max-w-xl p-6'>
        <h1 class='text-xl font-semibold'>{{ $record->name }}</h1>
        <a href='{{ route('{{ routeResource }}.index') }}'>Back</a>
    </div>
@endsection
";

/// Every bundled stub, keyed by logical name
pub const BUNDLED_STUBS: &[(&str, &str)] = &[
    ("migration.create_table.stub", MIGRATION_CREATE_TABLE),
    ("model.stub", MODEL),
    ("controller.inertia.stub", CONTROLLER_INERTIA),
    ("controller.inertia.resource.stub", CONTROLLER_INERTIA_RESOURCE),
    ("controller.blade.stub", CONTROLLER_BLADE),
    ("controller.blade.resource.stub", CONTROLLER_BLADE_RESOURCE),
    ("inertia.index.vue.stub", INERTIA_INDEX_VUE),
    ("inertia.create.vue.stub", INERTIA_CREATE_VUE),
    ("inertia.edit.vue.stub", INERTIA_EDIT_VUE),
    ("inertia.show.vue.stub", INERTIA_SHOW_VUE),
    ("inertia.index.vue.ts.stub", INERTIA_INDEX_VUE_TS),
    ("inertia.create.vue.ts.stub", INERTIA_CREATE_VUE_TS),
    ("inertia.edit.vue.ts.stub", INERTIA_EDIT_VUE_TS),
    ("inertia.show.vue.ts.stub", INERTIA_SHOW_VUE_TS),
    ("inertia.index.react.jsx.stub", INERTIA_INDEX_REACT_JSX),
    ("inertia.create.react.jsx.stub", INERTIA_CREATE_REACT_JSX),
    ("inertia.edit.react.jsx.stub", INERTIA_EDIT_REACT_JSX),
    ("inertia.show.react.jsx.stub", INERTIA_SHOW_REACT_JSX),
    ("inertia.index.react.tsx.stub", INERTIA_INDEX_REACT_TSX),
    ("inertia.create.react.tsx.stub", INERTIA_CREATE_REACT_TSX),
    ("inertia.edit.react.tsx.stub", INERTIA_EDIT_REACT_TSX),
    ("inertia.show.react.tsx.stub", INERTIA_SHOW_REACT_TSX),
    ("blade.index.stub", BLADE_INDEX),
    ("blade.create.stub", BLADE_CREATE),
    ("blade.edit.stub", BLADE_EDIT),
    ("blade.show.stub", BLADE_SHOW),
];

/// Look up a bundled stub by logical name
#[must_use]
pub fn bundled(name: &str) -> Option<&'static str> {
    BUNDLED_STUBS
        .iter()
        .find(|(stub, _)| *stub == name)
        .map(|(_, content)| *content)
}
